pub mod record_type_map;
pub mod server;
pub mod wire_record;
