pub mod contact_delivery;

pub use contact_delivery::{ContactDelivery, ContactPayload, DeliveryError, DeliveryRequest};
