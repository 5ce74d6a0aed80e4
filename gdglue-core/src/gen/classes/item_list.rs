# ! [doc = "Sidecar module of class [`ItemList`][crate::classes::ItemList]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `ItemList`.\n\nInherits from [`Control`][crate::classes::Control]."] # [derive (Debug)] # [repr (C)] pub struct ItemList { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl ItemList { pub fn set_item_count (& mut self , count : i64 ,) { type CallRet = () ; type CallParams = (i64 ,) ; let args = (count ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("ItemList" , "set_item_count") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_item_count (& self ,) -> i64 { type CallRet = i64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("ItemList" , "get_item_count") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [inline] pub fn select (& mut self , idx : i64 ,) { self . select_ex (idx ,) . done () } # [inline] pub fn select_ex < 'a > (& 'a mut self , idx : i64 ,) -> super :: ExSelect < 'a > { super :: ExSelect :: new (self , idx ,) } pub (crate) fn select_full (& mut self , idx : i64 , single : bool ,) { type CallRet = () ; type CallParams = (i64 , bool ,) ; let args = (idx , single ,) ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("ItemList" , "select") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_selected (& self , idx : i64 ,) -> bool { type CallRet = bool ; type CallParams = (i64 ,) ; let args = (idx ,) ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("ItemList" , "is_selected") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn deselect (& mut self , idx : i64 ,) { type CallRet = () ; type CallParams = (i64 ,) ; let args = (idx ,) ; unsafe { let method_bind = METHOD_TABLE . bind (4usize) ; let call_ctx = CallContext :: outbound ("ItemList" , "deselect") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for ItemList { type Base = crate :: classes :: Control ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("ItemList")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for ItemList { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for ItemList { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Control > for ItemList { } unsafe impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for ItemList { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for ItemList { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for ItemList { } impl crate :: obj :: cap :: GodotDefault for ItemList { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for ItemList { type Target = crate :: classes :: Control ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for ItemList { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_ItemList { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: ItemList > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Control > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: CanvasItem > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("ItemList" , & [sys :: MethodKey :: new ("set_item_count" , 1286410249i64) , sys :: MethodKey :: new ("get_item_count" , 3905245786i64) , sys :: MethodKey :: new ("select" , 972357352i64) , sys :: MethodKey :: new ("is_selected" , 1116898809i64) , sys :: MethodKey :: new ("deselect" , 1286410249i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "ItemList" , base : Some (& super :: control :: CLASS_METADATA) , is_refcounted : false , properties : & ["item_count"] , methods : & ["set_item_count" , "get_item_count" , "select" , "is_selected" , "deselect"] , signals : & ["item_selected" , "multi_selected"] , virtuals : & [] , } ; # [doc = "Default-param extender for [`ItemList::select_ex`][super::ItemList::select_ex]."] # [must_use] pub struct ExSelect < 'a > { surround_object : & 'a mut re_export :: ItemList , idx : i64 , single : bool , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExSelect < 'a > { fn new (surround_object : & 'a mut re_export :: ItemList , idx : i64 ,) -> Self { Self { surround_object , idx , single : true , } } # [inline] pub fn single (self , value : bool) -> Self { Self { single : value , .. self } } # [inline] pub fn done (self) { re_export :: ItemList :: select_full (self . surround_object , self . idx , self . single ,) } } # [doc = "Overridable methods declared by [`ItemList`][super::re_export::ItemList]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod IItemList { use super :: * ; } # [doc = "Signals declared by [`ItemList`][crate::classes::ItemList], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfItemList { object : Gd < crate :: classes :: Object > , } impl SignalsOfItemList { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `ItemList::item_selected`."] pub fn item_selected (& self) -> crate :: registry :: signal :: TypedSignal < (i64 ,) > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: ItemList as GodotClass > :: name_table () , "item_selected" ,) } # [doc = "Signal `ItemList::multi_selected`."] pub fn multi_selected (& self) -> crate :: registry :: signal :: TypedSignal < (i64 , bool ,) > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: ItemList as GodotClass > :: name_table () , "multi_selected" ,) } } impl std :: ops :: Deref for SignalsOfItemList { type Target = crate :: classes :: control :: SignalsOfControl ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl crate :: obj :: WithSignals for re_export :: ItemList { type SignalCollection = crate :: classes :: item_list :: SignalsOfItemList ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: item_list :: SignalsOfItemList :: __new (object) } }