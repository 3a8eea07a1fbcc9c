fn main() {
    // No-op without the ESP-IDF environment; exports the IDF link args
    // when building for the espidf target.
    embuild::espidf::sysenv::output();
}
