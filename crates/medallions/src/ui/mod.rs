pub mod bindings;
pub mod toggle;
