pub mod combinators;
pub mod context;
pub mod trampoline;

pub use combinators::{iff, seq2};
pub use context::{Context, SlotError, Value};
pub use trampoline::{run, sum_list, sum_list_recursive, Step, Thunk};
