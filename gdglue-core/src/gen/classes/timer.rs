# ! [doc = "Sidecar module of class [`Timer`][crate::classes::Timer]: enums, default-parameter builders and signals."] use gdglue_ffi as sys ; use crate :: builtin :: * ; use crate :: classes :: ensure_object_alive ; use crate :: meta :: { AsObjectArg , CallContext , ClassName , EngineEnum , ObjectArg , Signature } ; use crate :: meta :: error :: CallError ; use crate :: obj :: { Gd , GodotClass } ; use crate :: private :: ObjectRtti ; use crate :: registry :: names :: { ClassMetadata , NameTable , VirtualMethodInfo } ; pub (super) mod re_export { use super :: * ; # [doc = "Engine class `Timer`.\n\nInherits from [`Node`][crate::classes::Node]."] # [derive (Debug)] # [repr (C)] pub struct Timer { object_ptr : sys :: GDExtensionObjectPtr , rtti : Option < ObjectRtti > , } impl Timer { pub fn set_wait_time (& mut self , time_sec : f64 ,) { type CallRet = () ; type CallParams = (f64 ,) ; let args = (time_sec ,) ; unsafe { let method_bind = METHOD_TABLE . bind (0usize) ; let call_ctx = CallContext :: outbound ("Timer" , "set_wait_time") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_wait_time (& self ,) -> f64 { type CallRet = f64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (1usize) ; let call_ctx = CallContext :: outbound ("Timer" , "get_wait_time") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn set_one_shot (& mut self , enable : bool ,) { type CallRet = () ; type CallParams = (bool ,) ; let args = (enable ,) ; unsafe { let method_bind = METHOD_TABLE . bind (2usize) ; let call_ctx = CallContext :: outbound ("Timer" , "set_one_shot") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_one_shot (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (3usize) ; let call_ctx = CallContext :: outbound ("Timer" , "is_one_shot") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [inline] pub fn start (& mut self ,) { self . start_ex () . done () } # [inline] pub fn start_ex < 'a > (& 'a mut self ,) -> super :: ExStart < 'a > { super :: ExStart :: new (self ,) } pub (crate) fn start_full (& mut self , time_sec : f64 ,) { type CallRet = () ; type CallParams = (f64 ,) ; let args = (time_sec ,) ; unsafe { let method_bind = METHOD_TABLE . bind (4usize) ; let call_ctx = CallContext :: outbound ("Timer" , "start") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn stop (& mut self ,) { type CallRet = () ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (5usize) ; let call_ctx = CallContext :: outbound ("Timer" , "stop") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn is_stopped (& self ,) -> bool { type CallRet = bool ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (6usize) ; let call_ctx = CallContext :: outbound ("Timer" , "is_stopped") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } pub fn get_time_left (& self ,) -> f64 { type CallRet = f64 ; type CallParams = () ; let args = () ; unsafe { let method_bind = METHOD_TABLE . bind (7usize) ; let call_ctx = CallContext :: outbound ("Timer" , "get_time_left") ; let object_ptr = self . __checked_object_ptr (& call_ctx) ; Signature :: < CallParams , CallRet > :: out_class_ptrcall (method_bind , & call_ctx , object_ptr , args) } } # [doc = r" Native handle of this object, after checking that the object is still alive."] # [allow (dead_code)] fn __checked_object_ptr (& self , call_ctx : & CallContext) -> sys :: GDExtensionObjectPtr { let rtti = unsafe { self . rtti . as_ref () . unwrap_unchecked () } ; ensure_object_alive (rtti . instance_id () , self . object_ptr , call_ctx) ; # [cfg (feature = "safeguards-strict")] rtti . check_type :: < Self > () ; self . object_ptr } # [doc (hidden)] pub fn __method_table () -> & 'static sys :: LazyClassMethodTable { & METHOD_TABLE } } impl crate :: obj :: GodotClass for Timer { type Base = crate :: classes :: Node ; fn class_name () -> ClassName { static CLASS_NAME : std :: sync :: OnceLock < ClassName > = std :: sync :: OnceLock :: new () ; * CLASS_NAME . get_or_init (|| ClassName :: alloc_next ("Timer")) } fn name_table () -> & 'static NameTable { crate :: registry :: names :: flattened (& CLASS_METADATA) } } unsafe impl crate :: obj :: Bounds for Timer { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Timer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn as_type_ptr (& self) -> sys :: GDExtensionTypePtr { std :: ptr :: addr_of ! (self . object_ptr) as sys :: GDExtensionTypePtr } } unsafe impl crate :: obj :: Inherits < crate :: classes :: Node > for Timer { } unsafe impl crate :: obj :: Inherits < crate :: classes :: Object > for Timer { } impl crate :: obj :: cap :: GodotDefault for Timer { fn __godot_default () -> crate :: obj :: Gd < Self > { crate :: classes :: construct_engine_object :: < Self > () } } impl std :: ops :: Deref for Timer { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Timer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! __gdglue_inherits_Timer { ($ Class : ident) => { unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Timer > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } unsafe impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } static METHOD_TABLE : sys :: LazyClassMethodTable = sys :: LazyClassMethodTable :: new ("Timer" , & [sys :: MethodKey :: new ("set_wait_time" , 373806689i64) , sys :: MethodKey :: new ("get_wait_time" , 1740695150i64) , sys :: MethodKey :: new ("set_one_shot" , 2586408642i64) , sys :: MethodKey :: new ("is_one_shot" , 36873697i64) , sys :: MethodKey :: new ("start" , 1392008558i64) , sys :: MethodKey :: new ("stop" , 3218959716i64) , sys :: MethodKey :: new ("is_stopped" , 36873697i64) , sys :: MethodKey :: new ("get_time_left" , 1740695150i64) ,] ,) ; pub (crate) static CLASS_METADATA : ClassMetadata = ClassMetadata { name : "Timer" , base : Some (& super :: node :: CLASS_METADATA) , is_refcounted : false , properties : & ["wait_time" , "one_shot"] , methods : & ["set_wait_time" , "get_wait_time" , "set_one_shot" , "is_one_shot" , "start" , "stop" , "is_stopped" , "get_time_left"] , signals : & ["timeout"] , virtuals : & [] , } ; # [doc = "Default-param extender for [`Timer::start_ex`][super::Timer::start_ex]."] # [must_use] pub struct ExStart < 'a > { surround_object : & 'a mut re_export :: Timer , time_sec : f64 , } # [allow (clippy :: redundant_field_names , clippy :: needless_update)] impl < 'a > ExStart < 'a > { fn new (surround_object : & 'a mut re_export :: Timer ,) -> Self { Self { surround_object , time_sec : - 1f64 , } } # [inline] pub fn time_sec (self , value : f64) -> Self { Self { time_sec : value , .. self } } # [inline] pub fn done (self) { re_export :: Timer :: start_full (self . surround_object , self . time_sec ,) } } # [doc = "Overridable methods declared by [`Timer`][super::re_export::Timer]; see `ClassBuilder::virtual_method()`."] # [allow (non_snake_case)] pub mod ITimer { use super :: * ; } # [doc = "Signals declared by [`Timer`][crate::classes::Timer], and through `Deref` those of its base classes."] # [repr (transparent)] pub struct SignalsOfTimer { object : Gd < crate :: classes :: Object > , } impl SignalsOfTimer { # [doc (hidden)] pub fn __new (object : Gd < crate :: classes :: Object >) -> Self { Self { object } } # [doc = "Signal `Timer::timeout`."] pub fn timeout (& self) -> crate :: registry :: signal :: TypedSignal < () > { crate :: registry :: signal :: TypedSignal :: new (self . object . clone () , < re_export :: Timer as GodotClass > :: name_table () , "timeout" ,) } } impl std :: ops :: Deref for SignalsOfTimer { type Target = crate :: classes :: node :: SignalsOfNode ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl crate :: obj :: WithSignals for re_export :: Timer { type SignalCollection = crate :: classes :: timer :: SignalsOfTimer ; # [doc (hidden)] fn __signals_from_object (object : Gd < crate :: classes :: Object >) -> Self :: SignalCollection { crate :: classes :: timer :: SignalsOfTimer :: __new (object) } }