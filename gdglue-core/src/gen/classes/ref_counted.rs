# ! [doc = "Sidecar module of class [`RefCounted`][crate::classes::RefCounted]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `RefCounted`.\n\nInherits from [`Object`][crate::classes::Object]."] # [derive (Debug)] # [repr (C)] pub struct RefCounted { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl RefCounted { pub fn init_ref (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("RefCounted" , "init_ref") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn reference (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("RefCounted" , "reference") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn unreference (& mut self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("RefCounted" , "unreference") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_reference_count (& self ,) -> i64 { type CallRet = i64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("RefCounted" , "get_reference_count") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for RefCounted { type Base = crate :: classes :: Object ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("RefCounted")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for RefCounted { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for RefCounted { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for RefCounted { } impl crate :: obj :: cap :: GodotDefault for RefCounted { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for RefCounted { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for RefCounted { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_RefCounted { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("RefCounted" , & [sys :: MethodKey :: new ("init_ref" , 2240911060i64) , sys :: MethodKey :: new ("reference" , 2240911061i64) , sys :: MethodKey :: new ("unreference" , 2240911062i64) , sys :: MethodKey :: new ("get_reference_count" , 3905245786i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "RefCounted" , base : Some (& super :: object :: CLASS_METADATA) , is_refcounted : true , properties : & [] , methods : & ["init_ref" , "reference" , "unreference" , "get_reference_count"] , signals : & [] , virtuals : & [] , } ; # [doc = "Overridable methods declared by [`RefCounted`][super::re_export::RefCounted]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod IRefCounted { use super :: * ; } impl crate :: obj :: WithSignals for re_export :: RefCounted { type SignalCollection = crate :: classes :: object :: SignalsOfObject ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: object :: SignalsOfObject :: __new (object) } }