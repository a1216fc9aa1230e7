use crate::faas::DEFAULT_GATEWAY;
use crate::priority::{get_gateway_url, OPENFAAS_URL_ENVIRONMENT};
use crate::tls::tls_warning;
use crate::{cancel_on_interrupt, CommandAppend, State};
use clap::{App, ArgMatches, SubCommand};
use proxy::auth::CliAuth;
use proxy::client::Client;
use proxy::proxy::make_http_client;
use std::collections::HashMap;
use std::sync::Arc;
use utility::faas::types::model::FunctionStatus;

const DEFAULT_TIMEOUT: &str = "60s";
const LABEL_WIDTH: usize = 20;

pub(crate) struct Describe;

///FunctionDescription information related to a function
#[derive(Debug)]
pub(crate) struct FunctionDescription<'s> {
    pub name: &'s str,
    pub status: &'s str,
    pub replicas: u64,
    pub available_replicas: u64,
    pub invocation_count: u64,
    pub image: &'s str,
    pub env_process: &'s str,
    pub url: String,
    pub async_url: String,
    pub ram: Option<String>,
    pub cpu: Option<String>,
    pub labels: &'s HashMap<String, String>,
    pub annotations: &'s HashMap<String, String>,
}

impl<'s> FunctionDescription<'s> {
    pub(crate) fn new(
        function: &'s FunctionStatus,
        function_name: &'s str,
        gateway: &str,
        namespace: &str,
    ) -> FunctionDescription<'s> {
        let status = if function.available_replicas > 0 {
            "Ready"
        } else {
            "Not Ready"
        };
        let (url, async_url) = get_function_urls(gateway, function_name, namespace);

        FunctionDescription {
            name: function_name,
            status,
            replicas: function.replicas,
            available_replicas: function.available_replicas,
            invocation_count: function.invocation_count as u64,
            image: function.image.as_str(),
            env_process: function.env_process.as_str(),
            url,
            async_url,
            ram: function
                .usage
                .as_ref()
                .map(|u| format!("{:.2} MB", u.total_memory_bytes / 1024.0 / 1024.0)),
            cpu: function
                .usage
                .as_ref()
                .map(|u| format!("{:.0} Mi", u.cpu)),
            labels: &function.labels,
            annotations: &function.annotations,
        }
    }
}

impl CommandAppend for Describe {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        app.subcommand( SubCommand::with_name("describe")
            .about(r#"Display details of an OpenFaaS function
	Example: faas-status describe figlet
faas-status describe env --gateway http://127.0.0.1:8080
faas-status describe echo -g http://127.0.0.1:8080 -n openfaas-fn"#)
            .args_from_usage("<FUNCTION-NAME>                          'Name of the function'
                   --tls-no-verify                          'Disable TLS validation'
                   -k, --token [token]                      'Pass a JWT token to use instead of basic auth'
                   -n, --namespace [namespace]              'Namespace of the function'
                   --timeout [timeout]                      'Timeout for the API call, e.g. 30s or 1m'
                ")
        )
    }
}

impl Describe {
    #[inline(always)]
    pub(crate) async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(r_args) = args.subcommand_matches("describe") {
            let gateway = r_args
                .value_of("gateway")
                .or_else(|| args.value_of("gateway"))
                .unwrap_or(DEFAULT_GATEWAY);
            let token = r_args.value_of("token").unwrap_or_default();
            let function_namespace = r_args.value_of("namespace").unwrap_or_default();
            let tls_insecure = r_args.is_present("tls-no-verify");
            let timeout = r_args.value_of("timeout").unwrap_or(DEFAULT_TIMEOUT);
            let timeout = parse_duration::parse(timeout)
                .map_err(|e| State::Custom(format!("invalid --timeout {}: {}", timeout, e)))?;

            let function_name = r_args.value_of("FUNCTION-NAME").ok_or_else(|| {
                State::Custom(
                    "function name is required like: faas-status describe FUNCTION_NAME"
                        .to_string(),
                )
            })?;

            let openfaas_url = std::env::var(OPENFAAS_URL_ENVIRONMENT).unwrap_or_default();
            let gateway_address =
                get_gateway_url(gateway, DEFAULT_GATEWAY, openfaas_url.as_str());
            if let Some(warning) = tls_warning(gateway_address.as_str(), tls_insecure) {
                println!("{}", warning);
            }

            let client_auth = CliAuth::new(token, gateway_address.as_str())?;
            let http_client = make_http_client(Some(timeout), tls_insecure)?;
            let mut client = Client::with_http_client(
                Arc::new(client_auth),
                gateway_address.as_str(),
                http_client,
            )?;
            client.set_user_agent(concat!("faas-status/", env!("CARGO_PKG_VERSION")));

            let cancel = cancel_on_interrupt();
            let function = client
                .get_function_info(&cancel, function_name, function_namespace)
                .await?;

            let func_desc = FunctionDescription::new(
                &function,
                function_name,
                gateway_address.as_str(),
                function_namespace,
            );
            colour::green_ln!("{}", format_function_description(&func_desc));

            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

fn get_function_urls(
    gateway: &str,
    function_name: &str,
    function_namespace: &str,
) -> (String, String) {
    let gateway = gateway.trim_end_matches('/');

    let mut url = format!("{}/function/{}", gateway, function_name);
    let mut async_url = format!("{}/async-function/{}", gateway, function_name);

    if !function_namespace.is_empty() {
        url = url + "." + function_namespace;
        async_url = async_url + "." + function_namespace;
    }

    (url, async_url)
}

fn push_line(out: &mut String, label: &str, value: &str) {
    out.push_str(format!("{:width$}{}\n", label, value, width = LABEL_WIDTH).as_str());
}

fn push_map(out: &mut String, title: &str, map: &HashMap<String, String>) {
    if map.is_empty() {
        return;
    }
    let mut entries: Vec<(&String, &String)> = map.iter().collect();
    entries.sort();
    out.push_str(title);
    out.push('\n');
    for (key, value) in entries {
        push_line(out, "", format!("{} : {}", key, value).as_str());
    }
}

fn format_function_description(func_desc: &FunctionDescription) -> String {
    let mut out = String::new();
    push_line(&mut out, "Name:", func_desc.name);
    push_line(&mut out, "Status:", func_desc.status);
    push_line(&mut out, "Replicas:", func_desc.replicas.to_string().as_str());
    push_line(
        &mut out,
        "Available replicas:",
        func_desc.available_replicas.to_string().as_str(),
    );
    push_line(
        &mut out,
        "Invocations:",
        func_desc.invocation_count.to_string().as_str(),
    );
    push_line(&mut out, "Image:", func_desc.image);
    push_line(&mut out, "Function process:", func_desc.env_process);
    push_line(&mut out, "URL:", func_desc.url.as_str());
    push_line(&mut out, "Async URL:", func_desc.async_url.as_str());
    if let Some(ram) = &func_desc.ram {
        push_line(&mut out, "RAM:", ram.as_str());
    }
    if let Some(cpu) = &func_desc.cpu {
        push_line(&mut out, "CPU:", cpu.as_str());
    }
    push_map(&mut out, "Labels:", func_desc.labels);
    push_map(&mut out, "Annotations:", func_desc.annotations);
    out.trim_end().to_string()
}
