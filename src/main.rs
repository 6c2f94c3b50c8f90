fn main() {
    vertical_shooter::game::run();
}
