# ! [doc = "Sidecar module of class [`Node3D`][crate::classes::Node3D]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Node3D`.\n\nInherits from [`Node`][crate::classes::Node]."] # [derive (Debug)] # [repr (C)] pub struct Node3D { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Node3D { pub fn set_position (& mut self , position : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (position ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Node3D" , "set_position") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_position (& self ,) -> Vector3 { type CallRet = Vector3 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Node3D" , "get_position") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn translate (& mut self , offset : Vector3 ,) { type CallRet = () ; type CallParams = (Vector3 ,) ; let args = (offset ,) ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("Node3D" , "translate") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Node3D { type Base = crate :: classes :: Node ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Node3D")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Node3D { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Node3D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Node3D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node3D { } impl crate :: obj :: cap :: GodotDefault for Node3D { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Node3D { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node3D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Node3D { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node3D > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Node3D" , & [sys :: MethodKey :: new ("set_position" , 3460891852i64) , sys :: MethodKey :: new ("get_position" , 3360562783i64) , sys :: MethodKey :: new ("translate" , 3460891852i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Node3D" , base : Some (& super :: node :: CLASS_METADATA) , is_refcounted : false , properties : & ["position"] , methods : & ["set_position" , "get_position" , "translate"] , signals : & [] , virtuals : & [] , } ; # [doc = "Overridable methods declared by [`Node3D`][super::re_export::Node3D]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod INode3D { use super :: * ; } impl crate :: obj :: WithSignals for re_export :: Node3D { type SignalCollection = crate :: classes :: node :: SignalsOfNode ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: node :: SignalsOfNode :: __new (object) } }