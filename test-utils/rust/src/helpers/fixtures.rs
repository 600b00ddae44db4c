/// Shared lookups for program fixtures
pub struct BaseFixture;

impl BaseFixture {
    /// Locate a compiled program under `target/deploy`, searching from the
    /// workspace root or a member crate
    pub fn find_program_path(program_name: &str) -> Option<String> {
        ["", "../", "../../", "./"]
            .iter()
            .map(|prefix| format!("{}target/deploy/{}", prefix, program_name))
            .find(|path| std::path::Path::new(path).exists())
    }
}
