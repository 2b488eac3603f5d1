fn main() -> anyhow::Result<()> {
    sloth_lib::run()
}
