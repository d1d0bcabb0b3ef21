//! Request extractors that reject with `AppError` so failures use the response envelope.

mod product_id;
pub use product_id::ProductId;
