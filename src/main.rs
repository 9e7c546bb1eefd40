fn main() {
    pollster::block_on(matviz::run());
}
