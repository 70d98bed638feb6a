pub mod animation;
pub mod element;
pub mod event;
pub mod hit;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::AnimationState;
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{find, path_to};
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
