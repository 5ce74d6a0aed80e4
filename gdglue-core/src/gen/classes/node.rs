# ! [doc = "Sidecar module of class [`Node`][crate::classes::Node]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Node`.\n\nInherits from [`Object`][crate::classes::Object]."] # [derive (Debug)] # [repr (C)] pub struct Node { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Node { pub fn set_name (& mut self , name : impl Into < GString > ,) { type CallRet = () ; type CallParams = (GString ,) ; let args = (name . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Node" , "set_name") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_name (& self ,) -> StringName { type CallRet = StringName ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Node" , "get_name") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [inline] pub fn add_child (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { self . add_child_ex (node ,) . done () } # [inline] pub fn add_child_ex < 'a > (& 'a mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) -> super :: ExAddChild < 'a > { super :: ExAddChild :: new (self , node . as_object_arg () ,) } pub (crate) fn add_child_full (& mut self , node : ObjectArg < crate :: classes :: Node > , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > , bool , crate :: classes :: node :: InternalMode ,) ; let args = (node , force_readable_name , internal ,) ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("Node" , "add_child") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn remove_child (& mut self , node : impl AsObjectArg < crate :: classes :: Node > ,) { type CallRet = () ; type CallParams = (ObjectArg < crate :: classes :: Node > ,) ; let args = (node . as_object_arg () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("Node" , "remove_child") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [inline] pub fn get_child_count (& self ,) -> i64 { self . get_child_count_ex () . done () } # [inline] pub fn get_child_count_ex < 'a > (& 'a self ,) -> super :: ExGetChildCount < 'a > { super :: ExGetChildCount :: new (self ,) } pub (crate) fn get_child_count_full (& self , include_internal : bool ,) -> i64 { type CallRet = i64 ; type CallParams = (bool ,) ; let args = (include_internal ,) ; unsafe { let method_bind = METHOD_TABLE . bind (4usize) ; let call_ctx = CallContext :: outbound ("Node" , "get_child_count") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [inline] pub fn get_child (& self , idx : i64 ,) -> Option < Gd < crate :: classes :: Node >> { self . get_child_ex (idx ,) . done () } # [inline] pub fn get_child_ex < 'a > (& 'a self , idx : i64 ,) -> super :: ExGetChild < 'a > { super :: ExGetChild :: new (self , idx ,) } pub (crate) fn get_child_full (& self , idx : i64 , include_internal : bool ,) -> Option < Gd < crate :: classes :: Node >> { type CallRet = Option < Gd < crate :: classes :: Node >> ; type CallParams = (i64 , bool ,) ; let args = (idx , include_internal ,) ; unsafe { let method_bind = METHOD_TABLE . bind (5usize) ; let call_ctx = CallContext :: outbound ("Node" , "get_child") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_parent (& self ,) -> Option < Gd < crate :: classes :: Node >> { type CallRet = Option < Gd < crate :: classes :: Node >> ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (6usize) ; let call_ctx = CallContext :: outbound ("Node" , "get_parent") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn set_process (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = METHOD_TABLE . bind (7usize) ; let call_ctx = CallContext :: outbound ("Node" , "set_process") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_processing (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (8usize) ; let call_ctx = CallContext :: outbound ("Node" , "is_processing") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Node { type Base = crate :: classes :: Object ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Node")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Node { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Node { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Node { } impl crate :: obj :: cap :: GodotDefault for Node { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Node { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Node { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Node" , & [sys :: MethodKey :: new ("set_name" , 83702148i64) , sys :: MethodKey :: new ("get_name" , 2002593661i64) , sys :: MethodKey :: new ("add_child" , 3863233950i64) , sys :: MethodKey :: new ("remove_child" , 1078189570i64) , sys :: MethodKey :: new ("get_child_count" , 894402480i64) , sys :: MethodKey :: new ("get_child" , 541253412i64) , sys :: MethodKey :: new ("get_parent" , 3160264692i64) , sys :: MethodKey :: new ("set_process" , 2586408642i64) , sys :: MethodKey :: new ("is_processing" , 36873697i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Node" , base : Some (& super :: object :: CLASS_METADATA) , is_refcounted : false , properties : & ["name"] , methods : & ["set_name" , "get_name" , "add_child" , "remove_child" , "get_child_count" , "get_child" , "get_parent" , "set_process" , "is_processing"] , signals : & ["ready" , "renamed" , "tree_entered" , "child_entered_tree"] , virtuals : & [VirtualMethodInfo { name : "_process" , arity : 1usize } , VirtualMethodInfo { name : "_physics_process" , arity : 1usize } , VirtualMethodInfo { name : "_enter_tree" , arity : 0usize } , VirtualMethodInfo { name : "_exit_tree" , arity : 0usize } , VirtualMethodInfo { name : "_ready" , arity : 0usize }] , } ; # [doc = "Default-param extender for [`Node::add_child_ex`][super::Node::add_child_ex]."] # [must_use] pub struct ExAddChild < 'a > { surround_object : & 'a mut re_export :: Node , node : ObjectArg < crate :: classes :: Node > , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExAddChild < 'a > { fn new (surround_object : & 'a mut re_export :: Node , node : ObjectArg < crate :: classes :: Node > ,) -> Self { Self { surround_object , node , force_readable_name : false , internal : crate :: classes :: node :: InternalMode :: DISABLED , } } # [inline] pub fn force_readable_name (self , value : bool) -> Self { Self { force_readable_name : value , .. self } } # [inline] pub fn internal (self , value : crate :: classes :: node :: InternalMode) -> Self { Self { internal : value , .. self } } # [inline] pub fn done (self) { re_export :: Node :: add_child_full (self . surround_object , self . node , self . force_readable_name , self . internal ,) } } # [doc = "Default-param extender for [`Node::get_child_count_ex`][super::Node::get_child_count_ex]."] # [must_use] pub struct ExGetChildCount < 'a > { surround_object : & 'a re_export :: Node , include_internal : bool , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExGetChildCount < 'a > { fn new (surround_object : & 'a re_export :: Node ,) -> Self { Self { surround_object , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> i64 { re_export :: Node :: get_child_count_full (self . surround_object , self . include_internal ,) } } # [doc = "Default-param extender for [`Node::get_child_ex`][super::Node::get_child_ex]."] # [must_use] pub struct ExGetChild < 'a > { surround_object : & 'a re_export :: Node , idx : i64 , include_internal : bool , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExGetChild < 'a > { fn new (surround_object : & 'a re_export :: Node , idx : i64 ,) -> Self { Self { surround_object , idx , include_internal : false , } } # [inline] pub fn include_internal (self , value : bool) -> Self { Self { include_internal : value , .. self } } # [inline] pub fn done (self) -> Option < Gd < crate :: classes :: Node >> { re_export :: Node :: get_child_full (self . surround_object , self . idx , self . include_internal ,) } } # [doc = "Engine enum `InternalMode`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] pub struct InternalMode { ord : i32 } impl InternalMode { # [doc = "`INTERNAL_MODE_DISABLED` = 0"] pub const DISABLED : InternalMode = InternalMode { ord : 0i32 } ; # [doc = "`INTERNAL_MODE_FRONT` = 1"] pub const FRONT : InternalMode = InternalMode { ord : 1i32 } ; # [doc = "`INTERNAL_MODE_BACK` = 2"] pub const BACK : InternalMode = InternalMode { ord : 2i32 } ; } impl std :: fmt :: Debug for InternalMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { # [allow (unreachable_patterns)] let enumerator = match * self { Self :: DISABLED => "DISABLED" , Self :: FRONT => "FRONT" , Self :: BACK => "BACK" , _ => { return f . debug_struct ("InternalMode") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: meta :: EngineEnum for InternalMode { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0i32 | 1i32 | 2i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { # [allow (unreachable_patterns)] match * self { Self :: DISABLED => "DISABLED" , Self :: FRONT => "FRONT" , Self :: BACK => "BACK" , _ => "" , } } } impl crate :: meta :: GodotConvert for InternalMode { type Via = i64 ; } impl crate :: meta :: ToGodot for InternalMode { fn to_godot (& self) -> Self :: Via { < Self as crate :: meta :: EngineEnum > :: ord (* self) as i64 } } impl crate :: meta :: FromGodot for InternalMode { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: error :: ConvertError > { i32 :: try_from (via) . ok () . and_then (< Self as crate :: meta :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: error :: FromGodotError :: InvalidEnum . into_error (via)) } } # [doc = "Overridable methods declared by [`Node`][super::re_export::Node]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod INode { use super :: * ; # [doc = "Marker for `Node::_process(delta: f64)`."] pub struct Process ; impl crate :: registry :: VirtualMethod for Process { type Owner = super :: re_export :: Node ; type Params = (f64 ,) ; type Ret = () ; const NAME : & 'static str = "_process" ; } # [doc = "Marker for `Node::_physics_process(delta: f64)`."] pub struct PhysicsProcess ; impl crate :: registry :: VirtualMethod for PhysicsProcess { type Owner = super :: re_export :: Node ; type Params = (f64 ,) ; type Ret = () ; const NAME : & 'static str = "_physics_process" ; } # [doc = "Marker for `Node::_enter_tree()`."] pub struct EnterTree ; impl crate :: registry :: VirtualMethod for EnterTree { type Owner = super :: re_export :: Node ; type Params = () ; type Ret = () ; const NAME : & 'static str = "_enter_tree" ; } # [doc = "Marker for `Node::_exit_tree()`."] pub struct ExitTree ; impl crate :: registry :: VirtualMethod for ExitTree { type Owner = super :: re_export :: Node ; type Params = () ; type Ret = () ; const NAME : & 'static str = "_exit_tree" ; } # [doc = "Marker for `Node::_ready()`."] pub struct Ready ; impl crate :: registry :: VirtualMethod for Ready { type Owner = super :: re_export :: Node ; type Params = () ; type Ret = () ; const NAME : & 'static str = "_ready" ; } } # [doc = "Signals declared by [`Node`][crate::classes::Node], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfNode { object : Gd < crate :: classes :: Object > , } impl SignalsOfNode { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `Node::ready`."] pub fn ready (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Node as GodotClass > :: name_table () , "ready" ,) } # [doc = "Signal `Node::renamed`."] pub fn renamed (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Node as GodotClass > :: name_table () , "renamed" ,) } # [doc = "Signal `Node::tree_entered`."] pub fn tree_entered (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Node as GodotClass > :: name_table () , "tree_entered" ,) } # [doc = "Signal `Node::child_entered_tree`."] pub fn child_entered_tree (& self) -> crate :: registry :: signal :: TypedSignal < (Gd < crate :: classes :: Node > ,) > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Node as GodotClass > :: name_table () , "child_entered_tree" ,) } } impl std :: ops :: Deref for SignalsOfNode { type Target = crate :: classes :: object :: SignalsOfObject ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl crate :: obj :: WithSignals for re_export :: Node { type SignalCollection = crate :: classes :: node :: SignalsOfNode ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: node :: SignalsOfNode :: __new (object) } }