use std::collections::BTreeMap;
use std::fs;
use std::process::exit;
use clap::Parser;
use log::{error, info};
use ingress_ssl_store::common::common::setup_logging;
use ingress_ssl_store::config::structs::configuration::Configuration;
use ingress_ssl_store::ssl::ssl::{create_certificate_store, create_certificate_validator};
use ingress_ssl_store::ssl::structs::certificate_validator::CertificateValidator;
use ingress_ssl_store::structs::{Cli, Commands};
use serde_json::json;

fn main()
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let store = match create_certificate_store(&config.store) {
        Ok(store) => store,
        Err(e) => {
            error!("[BOOT] {}", e);
            exit(1);
        }
    };

    let code = match args.command {
        Commands::Put { name, cert, key } => {
            let certificate_pem = match fs::read_to_string(&cert) {
                Ok(data) => data,
                Err(e) => {
                    error!("[PUT] Unable to read certificate file {}: {}", cert.display(), e);
                    exit(1);
                }
            };
            let key_pem = match fs::read_to_string(&key) {
                Ok(data) => data,
                Err(e) => {
                    error!("[PUT] Unable to read key file {}: {}", key.display(), e);
                    exit(1);
                }
            };
            match store.put(&name, &certificate_pem, &key_pem) {
                Ok(path) => {
                    println!("{}", path.display());
                    0
                }
                Err(e) => {
                    error!("[PUT] {}", e);
                    1
                }
            }
        }
        Commands::Validate { names, json } => {
            let validator = create_certificate_validator(&store);
            validate(&validator, names, json)
        }
        Commands::Delete { name } => {
            match store.delete(&name) {
                Ok(true) => 0,
                Ok(false) => {
                    error!("[DELETE] No bundle named {}", name);
                    1
                }
                Err(e) => {
                    error!("[DELETE] {}", e);
                    1
                }
            }
        }
        Commands::List => {
            match store.list() {
                Ok(names) => {
                    for name in names {
                        println!("{}", name);
                    }
                    0
                }
                Err(e) => {
                    error!("[LIST] {}", e);
                    1
                }
            }
        }
    };

    exit(code)
}

fn validate(validator: &CertificateValidator, names: Vec<String>, as_json: bool) -> i32
{
    let results = if names.is_empty() {
        match validator.validate_all() {
            Ok(results) => results
                .into_iter()
                .map(|(name, result)| (name.to_string(), result))
                .collect::<Vec<_>>(),
            Err(e) => {
                error!("[VALIDATE] {}", e);
                return 1;
            }
        }
    } else {
        names
            .into_iter()
            .map(|name| {
                let result = validator.validate(&name);
                (name, result)
            })
            .collect()
    };

    let mut failed = false;
    let mut output = BTreeMap::new();
    for (name, result) in results {
        match result {
            Ok(hostnames) => {
                if !as_json {
                    println!("{}: {}", name, hostnames.join(" "));
                }
                output.insert(name, json!({ "status": "ok", "hostnames": hostnames }));
            }
            Err(e) => {
                failed = true;
                if !as_json {
                    println!("{}: ERROR {}", name, e);
                }
                output.insert(name, json!({ "status": "error", "error": e.to_string() }));
            }
        }
    }

    if as_json {
        match serde_json::to_string_pretty(&output) {
            Ok(data) => println!("{}", data),
            Err(e) => {
                error!("[VALIDATE] Unable to encode results: {}", e);
                return 1;
            }
        }
    }

    if failed { 1 } else { 0 }
}
