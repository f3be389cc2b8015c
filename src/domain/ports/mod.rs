pub mod id_generator;
pub mod key_value_store;
