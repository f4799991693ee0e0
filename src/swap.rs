// src/swap.rs

/// Content-swap rule for HTTP-refreshed panels.
///
/// The default behavior skips the swap when the response body is empty, so
/// stale panel content survives a blank reply. A 204 No Content status
/// forces the swap anyway: the server is explicitly saying "there is
/// nothing here now", and the panel must reflect that.
pub fn should_swap(status: u16, body: &str) -> bool {
    if status == 204 {
        return true;
    }
    !body.is_empty()
}

/// Applies the swap rule to `target`. Returns whether a swap occurred.
pub fn apply_swap(target: &mut String, status: u16, body: &str) -> bool {
    if !should_swap(status, body) {
        return false;
    }
    target.clear();
    target.push_str(body);
    true
}
