# ! [doc = "Sidecar module of class [`Node2D`][crate::classes::Node2D]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Node2D`.\n\nInherits from [`CanvasItem`][crate::classes::CanvasItem]."] # [derive (Debug)] # [repr (C)] pub struct Node2D { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Node2D { pub fn set_position (& mut self , position : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (position ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "set_position") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_position (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "get_position") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn set_rotation (& mut self , radians : f64 ,) { type CallRet = () ; type CallParams = (f64 ,) ; let args = (radians ,) ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "set_rotation") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_rotation (& self ,) -> f64 { type CallRet = f64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "get_rotation") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn rotate (& mut self , radians : f64 ,) { type CallRet = () ; type CallParams = (f64 ,) ; let args = (radians ,) ; unsafe { let method_bind = METHOD_TABLE . bind (4usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "rotate") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn translate (& mut self , offset : Vector2 ,) { type CallRet = () ; type CallParams = (Vector2 ,) ; let args = (offset ,) ; unsafe { let method_bind = METHOD_TABLE . bind (5usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "translate") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn set_transform (& mut self , xform : Transform2D ,) { type CallRet = () ; type CallParams = (Transform2D ,) ; let args = (xform ,) ; unsafe { let method_bind = METHOD_TABLE . bind (6usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "set_transform") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_transform (& self ,) -> Transform2D { type CallRet = Transform2D ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (7usize) ; let call_ctx = CallContext :: outbound ("Node2D" , "get_transform") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Node2D { type Base = crate :: classes :: CanvasItem ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Node2D")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Node2D { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Node2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Node2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Node2D { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node2D { } impl crate :: obj :: cap :: GodotDefault for Node2D { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Node2D { type Target = crate :: classes :: CanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Node2D { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node2D > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: CanvasItem > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Node2D" , & [sys :: MethodKey :: new ("set_position" , 743155724i64) , sys :: MethodKey :: new ("get_position" , 3341600327i64) , sys :: MethodKey :: new ("set_rotation" , 373806689i64) , sys :: MethodKey :: new ("get_rotation" , 1740695150i64) , sys :: MethodKey :: new ("rotate" , 373806689i64) , sys :: MethodKey :: new ("translate" , 743155724i64) , sys :: MethodKey :: new ("set_transform" , 2761652528i64) , sys :: MethodKey :: new ("get_transform" , 3814499831i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Node2D" , base : Some (& super :: canvas_item :: CLASS_METADATA) , is_refcounted : false , properties : & ["position" , "rotation" , "transform"] , methods : & ["set_position" , "get_position" , "set_rotation" , "get_rotation" , "rotate" , "translate" , "set_transform" , "get_transform"] , signals : & [] , virtuals : & [] , } ; # [doc = "Overridable methods declared by [`Node2D`][super::re_export::Node2D]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod INode2D { use super :: * ; } impl crate :: obj :: WithSignals for re_export :: Node2D { type SignalCollection = crate :: classes :: canvas_item :: SignalsOfCanvasItem ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: canvas_item :: SignalsOfCanvasItem :: __new (object) } }