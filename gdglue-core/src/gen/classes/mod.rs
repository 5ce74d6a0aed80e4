pub mod object ; pub use object :: re_export :: Object ; pub use object :: IObject ; pub mod ref_counted ; pub use ref_counted :: re_export :: RefCounted ; pub use ref_counted :: IRefCounted ; pub mod resource ; pub use resource :: re_export :: Resource ; pub use resource :: IResource ; pub mod node ; pub use node :: re_export :: Node ; pub use node :: INode ; pub mod canvas_item ; pub use canvas_item :: re_export :: CanvasItem ; pub use canvas_item :: ICanvasItem ; pub mod node_2d ; pub use node_2d :: re_export :: Node2D ; pub use node_2d :: INode2D ; pub mod node_3d ; pub use node_3d :: re_export :: Node3D ; pub use node_3d :: INode3D ; pub mod control ; pub use control :: re_export :: Control ; pub use control :: IControl ; pub mod item_list ; pub use item_list :: re_export :: ItemList ; pub use item_list :: IItemList ; pub mod timer ; pub use timer :: re_export :: Timer ; pub use timer :: ITimer ; # [doc = r" Per-class helper macros, used by `godot_class!` to declare the inheritance chain of a user class."] # [doc (hidden)] # [allow (non_snake_case)] pub mod class_macros { pub use crate :: * ; pub mod Object { pub use super :: __gdglue_inherits_Object as inherits ; } pub mod RefCounted { pub use super :: __gdglue_inherits_RefCounted as inherits ; } pub mod Resource { pub use super :: __gdglue_inherits_Resource as inherits ; } pub mod Node { pub use super :: __gdglue_inherits_Node as inherits ; } pub mod CanvasItem { pub use super :: __gdglue_inherits_CanvasItem as inherits ; } pub mod Node2D { pub use super :: __gdglue_inherits_Node2D as inherits ; } pub mod Node3D { pub use super :: __gdglue_inherits_Node3D as inherits ; } pub mod Control { pub use super :: __gdglue_inherits_Control as inherits ; } pub mod ItemList { pub use super :: __gdglue_inherits_ItemList as inherits ; } pub mod Timer { pub use super :: __gdglue_inherits_Timer as inherits ; } }