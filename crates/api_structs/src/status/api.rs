pub mod get_service_health {
    /// Plain text body
    pub type APIResponse = String;
}
