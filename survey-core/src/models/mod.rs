mod form_field;
mod price_tier;
mod property_value;
mod quote_request;
mod quote_result;

pub use form_field::FormField;
pub use price_tier::PriceTier;
pub use property_value::PropertyValue;
pub use quote_request::{QuoteRequest, REFERRING_FIRM_KEY};
pub use quote_result::QuoteResult;
