use vkdecl_build::ExtensionRegistry;

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    vkdecl_build::run(&ExtensionRegistry::default())?;
    Ok(())
}
