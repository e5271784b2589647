fn main() {
    // Compile the protos into the default Cargo OUT_DIR, generating both
    // the message types and the tonic service stubs
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(
            &["../../proto/telemetry.proto"], // Path to .proto file
            &["../../proto/"],                // Include path
        )
        .expect("Failed to compile protos");

    println!("cargo:rerun-if-changed=../../proto/telemetry.proto");
}
