# ! [doc = "Sidecar module of class [`CanvasItem`][crate::classes::CanvasItem]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `CanvasItem`.\n\nInherits from [`Node`][crate::classes::Node]."] # [derive (Debug)] # [repr (C)] pub struct CanvasItem { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl CanvasItem { pub fn set_visible (& mut self , visible : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (visible ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("CanvasItem" , "set_visible") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_visible (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("CanvasItem" , "is_visible") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn set_modulate (& mut self , modulate : Color ,) { type CallRet = () ; type CallParams = (Color ,) ; let args = (modulate ,) ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("CanvasItem" , "set_modulate") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_modulate (& self ,) -> Color { type CallRet = Color ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("CanvasItem" , "get_modulate") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn queue_redraw (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (4usize) ; let call_ctx = CallContext :: outbound ("CanvasItem" , "queue_redraw") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for CanvasItem { type Base = crate :: classes :: Node ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("CanvasItem")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for CanvasItem { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for CanvasItem { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for CanvasItem { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for CanvasItem { } impl std :: ops :: Deref for CanvasItem { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CanvasItem { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_CanvasItem { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: CanvasItem > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("CanvasItem" , & [sys :: MethodKey :: new ("set_visible" , 2586408642i64) , sys :: MethodKey :: new ("is_visible" , 36873697i64) , sys :: MethodKey :: new ("set_modulate" , 2920490490i64) , sys :: MethodKey :: new ("get_modulate" , 3444240500i64) , sys :: MethodKey :: new ("queue_redraw" , 3218959716i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "CanvasItem" , base : Some (& super :: node :: CLASS_METADATA) , is_refcounted : false , properties : & ["visible" , "modulate"] , methods : & ["set_visible" , "is_visible" , "set_modulate" , "get_modulate" , "queue_redraw"] , signals : & ["draw" , "visibility_changed"] , virtuals : & [VirtualMethodInfo { name : "_draw" , arity : 0usize }] , } ; # [doc = "Overridable methods declared by [`CanvasItem`][super::re_export::CanvasItem]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod ICanvasItem { use super :: * ; # [doc = "Marker for `CanvasItem::_draw()`."] pub struct Draw ; impl crate :: registry :: VirtualMethod for Draw { type Owner = super :: re_export :: CanvasItem ; type Params = () ; type Ret = () ; const NAME : & 'static str = "_draw" ; } } # [doc = "Signals declared by [`CanvasItem`][crate::classes::CanvasItem], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfCanvasItem { object : Gd < crate :: classes :: Object > , } impl SignalsOfCanvasItem { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `CanvasItem::draw`."] pub fn draw (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: CanvasItem as GodotClass > :: name_table () , "draw" ,) } # [doc = "Signal `CanvasItem::visibility_changed`."] pub fn visibility_changed (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: CanvasItem as GodotClass > :: name_table () , "visibility_changed" ,) } } impl std :: ops :: Deref for SignalsOfCanvasItem { type Target = crate :: classes :: node :: SignalsOfNode ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl crate :: obj :: WithSignals for re_export :: CanvasItem { type SignalCollection = crate :: classes :: canvas_item :: SignalsOfCanvasItem ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: canvas_item :: SignalsOfCanvasItem :: __new (object) } }