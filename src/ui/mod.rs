/// View construction module
///
/// Pure view functions over the application state:
/// - Upload panels for the person and garment slots (upload.rs)
/// - The result presenter (result.rs)

pub mod result;
pub mod upload;
