use contracts::system::auth::{
    Session, LOGGED_IN_FLAG, STORAGE_KEY_LOGGED_IN, STORAGE_KEY_LOGIN_TIME, STORAGE_KEY_USERNAME,
};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(storage: &web_sys::Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok()?
}

/// Session kept from a previous visit, if the flag is set
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let logged_in = get_item(&storage, STORAGE_KEY_LOGGED_IN);
    let username = get_item(&storage, STORAGE_KEY_USERNAME);
    let login_time = get_item(&storage, STORAGE_KEY_LOGIN_TIME);
    Session::restore(logged_in.as_deref(), username.as_deref(), login_time.as_deref())
}

/// Writes the three session keys
pub fn save_session(session: &Session) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Local storage is not available")?;
    let set = |key: &str, value: &str| {
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to write {key}: {e:?}"))
    };
    set(STORAGE_KEY_LOGGED_IN, LOGGED_IN_FLAG)?;
    set(STORAGE_KEY_USERNAME, &session.username)?;
    if let Some(time) = session.login_time_value() {
        set(STORAGE_KEY_LOGIN_TIME, &time)?;
    }
    Ok(())
}

/// Clear all session keys
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_LOGGED_IN);
        let _ = storage.remove_item(STORAGE_KEY_USERNAME);
        let _ = storage.remove_item(STORAGE_KEY_LOGIN_TIME);
    }
}
