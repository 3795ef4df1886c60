pub mod google_sheets_store;
