# ! [doc = "Sidecar module of class [`Object`][crate::classes::Object]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Object`.\n\nInherits from no other class."] # [derive (Debug)] # [repr (C)] pub struct Object { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Object { pub fn get_class (& self ,) -> GString { type CallRet = GString ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Object" , "get_class") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_class (& self , class : impl Into < GString > ,) -> bool { type CallRet = bool ; type CallParams = (GString ,) ; let args = (class . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Object" , "is_class") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_instance_id (& self ,) -> i64 { type CallRet = i64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("Object" , "get_instance_id") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn has_method (& self , method : impl Into < StringName > ,) -> bool { type CallRet = bool ; type CallParams = (StringName ,) ; let args = (method . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("Object" , "has_method") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn has_signal (& self , signal : impl Into < StringName > ,) -> bool { type CallRet = bool ; type CallParams = (StringName ,) ; let args = (signal . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (4usize) ; let call_ctx = CallContext :: outbound ("Object" , "has_signal") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn call (& mut self , method : impl Into < StringName > , varargs : & [Variant]) -> Variant { Self :: try_call (self , method , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_call (& mut self , method : impl Into < StringName > , varargs : & [Variant]) -> Result < Variant , CallError > { type CallRet = Variant ; type CallParams = (StringName ,) ; let args = (method . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (5usize) ; let call_ctx = CallContext :: outbound ("Object" , "call") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , & call_ctx , object_ptr , args , varargs) } } # [doc = r" # Panics"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will panic in such a case."] pub fn emit_signal (& mut self , signal : impl Into < StringName > , varargs : & [Variant]) -> crate :: global :: Error { Self :: try_emit_signal (self , signal , varargs) . unwrap_or_else (| e | panic ! ("{e}")) } # [doc = r" # Return type"] # [doc = r" This is a _varcall_ method, meaning parameters and return values are passed as `Variant`."] # [doc = r" It can detect call failures and will return `Err` in such a case."] pub fn try_emit_signal (& mut self , signal : impl Into < StringName > , varargs : & [Variant]) -> Result < crate :: global :: Error , CallError > { type CallRet = crate :: global :: Error ; type CallParams = (StringName ,) ; let args = (signal . into () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (6usize) ; let call_ctx = CallContext :: outbound ("Object" , "emit_signal") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_varcall (method_bind , & call_ctx , object_ptr , args , varargs) } } # [inline] pub fn connect (& mut self , signal : impl Into < StringName > , callable : & Callable ,) -> crate :: global :: Error { self . connect_ex (signal , callable ,) . done () } # [inline] pub fn connect_ex < 'a > (& 'a mut self , signal : impl Into < StringName > , callable : & Callable ,) -> super :: ExConnect < 'a > { super :: ExConnect :: new (self , signal . into () , callable . clone () ,) } pub (crate) fn connect_full (& mut self , signal : StringName , callable : Callable , flags : i64 ,) -> crate :: global :: Error { type CallRet = crate :: global :: Error ; type CallParams = (StringName , Callable , i64 ,) ; let args = (signal , callable , flags ,) ; unsafe { let method_bind = METHOD_TABLE . bind (7usize) ; let call_ctx = CallContext :: outbound ("Object" , "connect") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn disconnect (& mut self , signal : impl Into < StringName > , callable : & Callable ,) { type CallRet = () ; type CallParams = (StringName , Callable ,) ; let args = (signal . into () , callable . clone () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (8usize) ; let call_ctx = CallContext :: outbound ("Object" , "disconnect") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_connected (& self , signal : impl Into < StringName > , callable : & Callable ,) -> bool { type CallRet = bool ; type CallParams = (StringName , Callable ,) ; let args = (signal . into () , callable . clone () ,) ; unsafe { let method_bind = METHOD_TABLE . bind (9usize) ; let call_ctx = CallContext :: outbound ("Object" , "is_connected") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Object { type Base = crate :: obj :: NoBase ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Object")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Object { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemDynamic ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Object { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } impl crate :: obj :: cap :: GodotDefault for Object { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Object { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Object" , & [sys :: MethodKey :: new ("get_class" , 201670096i64) , sys :: MethodKey :: new ("is_class" , 3927539163i64) , sys :: MethodKey :: new ("get_instance_id" , 3905245786i64) , sys :: MethodKey :: new ("has_method" , 2619796661i64) , sys :: MethodKey :: new ("has_signal" , 2619796662i64) , sys :: MethodKey :: new ("call" , 3400424181i64) , sys :: MethodKey :: new ("emit_signal" , 4047867050i64) , sys :: MethodKey :: new ("connect" , 1518946055i64) , sys :: MethodKey :: new ("disconnect" , 1874754934i64) , sys :: MethodKey :: new ("is_connected" , 768136979i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Object" , base : None , is_refcounted : false , properties : & [] , methods : & ["get_class" , "is_class" , "get_instance_id" , "has_method" , "has_signal" , "call" , "emit_signal" , "connect" , "disconnect" , "is_connected"] , signals : & ["script_changed" , "property_list_changed"] , virtuals : & [] , } ; # [doc = "Default-param extender for [`Object::connect_ex`][super::Object::connect_ex]."] # [must_use] pub struct ExConnect < 'a > { surround_object : & 'a mut re_export :: Object , signal : StringName , callable : Callable , flags : i64 , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExConnect < 'a > { fn new (surround_object : & 'a mut re_export :: Object , signal : StringName , callable : Callable ,) -> Self { Self { surround_object , signal , callable , flags : 0 , } } # [inline] pub fn flags (self , value : i64) -> Self { Self { flags : value , .. self } } # [inline] pub fn done (self) -> crate :: global :: Error { re_export :: Object :: connect_full (self . surround_object , self . signal , self . callable , self . flags ,) } } # [doc = "Overridable methods declared by [`Object`][super::re_export::Object]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod IObject { use super :: * ; } # [doc = "Signals declared by [`Object`][crate::classes::Object], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfObject { object : Gd < crate :: classes :: Object > , } impl SignalsOfObject { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `Object::script_changed`."] pub fn script_changed (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Object as GodotClass > :: name_table () , "script_changed" ,) } # [doc = "Signal `Object::property_list_changed`."] pub fn property_list_changed (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Object as GodotClass > :: name_table () , "property_list_changed" ,) } } impl crate :: obj :: WithSignals for re_export :: Object { type SignalCollection = crate :: classes :: object :: SignalsOfObject ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: object :: SignalsOfObject :: __new (object) } }