pub fn ask<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Makes the tracker verbose. Useful for debugging and seeing what's going on \"under the hood\"")
        )
        .arg(
            clap::Arg::with_name("config")
                .short("c")
                .long("config")
                .help("Path to .jobtrackerrc file")
                .default_value(".jobtrackerrc")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("database")
                .short("d")
                .long("database")
                .help("Database name")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("collection")
                .long("collection")
                .help("Collection holding the jobs")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .help("Seconds to wait for each database operation")
                .takes_value(true),
        )
        .subcommand(
            clap::App::new("serve")
                .about("Start the job tracker HTTP server")
                .arg(
                    clap::Arg::with_name("port")
                        .short("p")
                        .long("port")
                        .help("Custom server port")
                        .takes_value(true),
                ),
        )
        .subcommand(
            clap::App::new("seed")
                .about("Insert a few sample jobs into the database")
        )
}
