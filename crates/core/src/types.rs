/// Field record ids are 1-based and assigned in insertion order.
pub type FieldId = i64;
