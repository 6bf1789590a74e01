fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_file = "../../proto/meshcoord.proto";
    let proto_dir = "../../proto";

    println!("cargo:rerun-if-changed={}", proto_file);

    std::fs::create_dir_all("src/generated")?;

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir("src/generated")
        .compile(&[proto_file], &[proto_dir])?;

    Ok(())
}
