use storage::{error::Result, WorkoutStore};

/// The user's rotation pointer; 1 until the user first moves it.
pub async fn current_day(store: &dyn WorkoutStore, user_id: &str) -> Result<u8> {
    store.current_day(user_id).await
}

/// Move the rotation pointer. Last writer wins.
pub async fn set_current_day(store: &dyn WorkoutStore, user_id: &str, day: u8) -> Result<u8> {
    store.set_current_day(user_id, day).await
}
