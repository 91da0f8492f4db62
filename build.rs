use std::env;

const PROTO_FILES: &[&str] = &[
    "proto/test.proto",
    "proto/sample.proto",
    "proto/fixtures.proto",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for proto in PROTO_FILES {
        println!("cargo:rerun-if-changed={}", proto);
    }
    println!("cargo:rerun-if-env-changed=PROTODEFAULTS_REGENERATE_PROTO");

    // Generated bindings are committed under src/proto; protoc is only
    // needed when they are refreshed.
    if env::var_os("PROTODEFAULTS_REGENERATE_PROTO").is_some() {
        tonic_build::configure()
            .build_server(false)
            .build_client(false)
            .out_dir("src/proto")
            .compile(PROTO_FILES, &["proto"])?;
    }

    Ok(())
}
