use crate::filter::Filter;
use std::rc::Rc;

/// Broadcast to every listener after a dimension's filter changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEvent {
    /// Name of the dimension whose filter changed
    pub dimension: String,
    /// The filter now in effect on that dimension
    pub filter: Filter,
}

pub type Listener = Rc<dyn Fn(&FilterEvent)>;
