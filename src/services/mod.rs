pub mod session_store;
pub mod supabase;

pub use session_store::{SessionStore, StoreError};
pub use supabase::SupabaseStore;
