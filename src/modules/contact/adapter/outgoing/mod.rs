pub mod emailjs_delivery;
pub mod logging_delivery;
pub mod smtp_delivery;
