# ! [doc = "Sidecar module of class [`Resource`][crate::classes::Resource]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Resource`.\n\nInherits from [`RefCounted`][crate::classes::RefCounted]."] # [derive (Debug)] # [repr (C)] pub struct Resource { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Resource { pub fn set_name (& mut self , name : impl Into < GString > ,) { type CallRet = () ; type CallParams = (GString ,) ; let args = (name . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Resource" , "set_name") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_name (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Resource" , "get_name") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn emit_changed (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("Resource" , "emit_changed") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Resource { type Base = crate :: classes :: RefCounted ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Resource")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Resource { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Resource { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Resource { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Resource { } impl crate :: obj :: cap :: GodotDefault for Resource { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Resource { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Resource { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Resource { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Resource > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Resource" , & [sys :: MethodKey :: new ("set_name" , 83702148i64) , sys :: MethodKey :: new ("get_name" , 201670096i64) , sys :: MethodKey :: new ("emit_changed" , 3218959716i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Resource" , base : Some (& super :: ref_counted :: CLASS_METADATA) , is_refcounted : true , properties : & ["resource_name"] , methods : & ["set_name" , "get_name" , "emit_changed"] , signals : & ["changed"] , virtuals : & [VirtualMethodInfo { name : "_setup_local_to_scene" , arity : 0usize }] , } ; # [doc = "Overridable methods declared by [`Resource`][super::re_export::Resource]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod IResource { use super :: * ; # [doc = "Marker for `Resource::_setup_local_to_scene()`."] pub struct SetupLocalToScene ; impl crate :: registry :: VirtualMethod for SetupLocalToScene { type Owner = super :: re_export :: Resource ; type Params = () ; type Ret = () ; const NAME : & 'static str = "_setup_local_to_scene" ; } } # [doc = "Signals declared by [`Resource`][crate::classes::Resource], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfResource { object : Gd < crate :: classes :: Object > , } impl SignalsOfResource { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `Resource::changed`."] pub fn changed (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Resource as GodotClass > :: name_table () , "changed" ,) } } impl std :: ops :: Deref for SignalsOfResource { type Target = crate :: classes :: object :: SignalsOfObject ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl crate :: obj :: WithSignals for re_export :: Resource { type SignalCollection = crate :: classes :: resource :: SignalsOfResource ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: resource :: SignalsOfResource :: __new (object) } }