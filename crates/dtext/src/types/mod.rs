mod arg;
mod deferred;
mod number;
mod quantity;
mod resolved;
mod resource_id;

pub use arg::Arg;
pub use deferred::DeferredText;
pub use number::Number;
pub use quantity::Quantity;
pub use resolved::ResolvedText;
pub use resource_id::{PluralResourceId, ResourceId};
