pub mod api_utils;
pub mod components;
pub mod csv_importer;
pub mod export;
pub mod icons;
pub mod notify;
