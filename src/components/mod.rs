pub mod design_type;
pub mod store_partner;
