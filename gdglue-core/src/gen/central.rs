# [doc = r" Engine version the bindings were generated from."] pub const GODOT_VERSION_STRING : & str = "Godot Engine v4.3.stable.gdglue" ; pub const GODOT_VERSION : (u8 , u8 , u8) = (4u8 , 3u8 , 0u8) ; pub mod global_enums { # [doc = "Engine enum `Error`."] # [repr (transparent)] # [derive (Copy , Clone , Eq , PartialEq , Hash)] pub struct Error { ord : i32 } impl Error { # [doc = "`OK` = 0"] pub const OK : Error = Error { ord : 0i32 } ; # [doc = "`FAILED` = 1"] pub const FAILED : Error = Error { ord : 1i32 } ; # [doc = "`ERR_UNAVAILABLE` = 2"] pub const ERR_UNAVAILABLE : Error = Error { ord : 2i32 } ; # [doc = "`ERR_INVALID_PARAMETER` = 31"] pub const ERR_INVALID_PARAMETER : Error = Error { ord : 31i32 } ; # [doc = "`ERR_ALREADY_EXISTS` = 32"] pub const ERR_ALREADY_EXISTS : Error = Error { ord : 32i32 } ; # [doc = "`ERR_DOES_NOT_EXIST` = 33"] pub const ERR_DOES_NOT_EXIST : Error = Error { ord : 33i32 } ; } impl std :: fmt :: Debug for Error { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { # [allow (unreachable_patterns)] let enumerator = match * self { Self :: OK => "OK" , Self :: FAILED => "FAILED" , Self :: ERR_UNAVAILABLE => "ERR_UNAVAILABLE" , Self :: ERR_INVALID_PARAMETER => "ERR_INVALID_PARAMETER" , Self :: ERR_ALREADY_EXISTS => "ERR_ALREADY_EXISTS" , Self :: ERR_DOES_NOT_EXIST => "ERR_DOES_NOT_EXIST" , _ => { return f . debug_struct ("Error") . field ("ord" , & self . ord) . finish () ; } } ; f . write_str (enumerator) } } impl crate :: meta :: EngineEnum for Error { fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0i32 | 1i32 | 2i32 | 31i32 | 32i32 | 33i32 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { # [allow (unreachable_patterns)] match * self { Self :: OK => "OK" , Self :: FAILED => "FAILED" , Self :: ERR_UNAVAILABLE => "ERR_UNAVAILABLE" , Self :: ERR_INVALID_PARAMETER => "ERR_INVALID_PARAMETER" , Self :: ERR_ALREADY_EXISTS => "ERR_ALREADY_EXISTS" , Self :: ERR_DOES_NOT_EXIST => "ERR_DOES_NOT_EXIST" , _ => "" , } } } impl crate :: meta :: GodotConvert for Error { type Via = i64 ; } impl crate :: meta :: ToGodot for Error { fn to_godot (& self) -> Self :: Via { < Self as crate :: meta :: EngineEnum > :: ord (* self) as i64 } } impl crate :: meta :: FromGodot for Error { fn try_from_godot (via : Self :: Via) -> std :: result :: Result < Self , crate :: meta :: error :: ConvertError > { i32 :: try_from (via) . ok () . and_then (< Self as crate :: meta :: EngineEnum > :: try_from_ord) . ok_or_else (|| crate :: meta :: error :: FromGodotError :: InvalidEnum . into_error (via)) } } }