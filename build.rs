fn main() {
    // Export ESP-IDF link args and sysenv only for firmware builds; host
    // builds (the default feature set) need none of it.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
