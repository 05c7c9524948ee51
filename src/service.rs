/// Normalizes a service identifier so visually equivalent inputs derive the
/// same password: trim, lowercase, strip an `http`/`https` scheme, and drop
/// any path after the hostname (port numbers survive). Idempotent.
pub fn normalize_service(raw: &str) -> String {
    let mut service = raw.trim().to_lowercase();

    if service.starts_with("http") {
        if let Some(pos) = service.find("://") {
            service.drain(..pos + 3);
        }
    }

    // Only hostname-shaped strings lose their path; a bare "some/service"
    // label is kept whole.
    if service.contains('.') {
        if let Some(slash) = service.find('/') {
            service.truncate(slash);
        }
    }

    service
}
