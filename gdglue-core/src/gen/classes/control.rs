# ! [doc = "Sidecar module of class [`Control`][crate::classes::Control]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Control`.\n\nInherits from [`CanvasItem`][crate::classes::CanvasItem]."] # [derive (Debug)] # [repr (C)] pub struct Control { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Control { # [inline] pub fn set_size (& mut self , size : Vector2 ,) { self . set_size_ex (size ,) . done () } # [inline] pub fn set_size_ex < 'a > (& 'a mut self , size : Vector2 ,) -> super :: ExSetSize < 'a > { super :: ExSetSize :: new (self , size ,) } pub (crate) fn set_size_full (& mut self , size : Vector2 , keep_offsets : bool ,) { type CallRet = () ; type CallParams = (Vector2 , bool ,) ; let args = (size , keep_offsets ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Control" , "set_size") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_size (& self ,) -> Vector2 { type CallRet = Vector2 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Control" , "get_size") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Control { type Base = crate :: classes :: CanvasItem ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Control")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Control { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Control { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Control { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Control { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Control { } impl crate :: obj :: cap :: GodotDefault for Control { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Control { type Target = crate :: classes :: CanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Control { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Control { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Control > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: CanvasItem > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Control" , & [sys :: MethodKey :: new ("set_size" , 2436320129i64) , sys :: MethodKey :: new ("get_size" , 3341600327i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Control" , base : Some (& super :: canvas_item :: CLASS_METADATA) , is_refcounted : false , properties : & ["size"] , methods : & ["set_size" , "get_size"] , signals : & ["resized" , "focus_entered"] , virtuals : & [VirtualMethodInfo { name : "_has_point" , arity : 1usize }] , } ; # [doc = "Default-param extender for [`Control::set_size_ex`][super::Control::set_size_ex]."] # [must_use] pub struct ExSetSize < 'a > { surround_object : & 'a mut re_export :: Control , size : Vector2 , keep_offsets : bool , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSetSize < 'a > { fn new (surround_object : & 'a mut re_export :: Control , size : Vector2 ,) -> Self { Self { surround_object , size , keep_offsets : false , } } # [inline] pub fn keep_offsets (self , value : bool) -> Self { Self { keep_offsets : value , .. self } } # [inline] pub fn done (self) { re_export :: Control :: set_size_full (self . surround_object , self . size , self . keep_offsets ,) } } # [doc = "Overridable methods declared by [`Control`][super::re_export::Control]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod IControl { use super :: * ; # [doc = "Marker for `Control::_has_point(point: Vector2)`."] pub struct HasPoint ; impl crate :: registry :: VirtualMethod for HasPoint { type Owner = super :: re_export :: Control ; type Params = (Vector2 ,) ; type Ret = bool ; const NAME : & 'static str = "_has_point" ; } } # [doc = "Signals declared by [`Control`][crate::classes::Control], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfControl { object : Gd < crate :: classes :: Object > , } impl SignalsOfControl { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `Control::resized`."] pub fn resized (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Control as GodotClass > :: name_table () , "resized" ,) } # [doc = "Signal `Control::focus_entered`."] pub fn focus_entered (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Control as GodotClass > :: name_table () , "focus_entered" ,) } } impl std :: ops :: Deref for SignalsOfControl { type Target = crate :: classes :: canvas_item :: SignalsOfCanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl crate :: obj :: WithSignals for re_export :: Control { type SignalCollection = crate :: classes :: control :: SignalsOfControl ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: control :: SignalsOfControl :: __new (object) } }