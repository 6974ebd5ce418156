fn main() {
    sitesetup::run();
}
