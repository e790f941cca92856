use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use mailgun_api::config::Overrides;
use mailgun_api::utils::{ResponseFormat, ResponseFormatter};
use mailgun_api::{
    ConfigLoader, MailgunClient, MessageSearch, Method, OutputFormat, Params, ResponseBody,
};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(name = "mailgun", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// 配置文件路径，默认自动查找 mailgun.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "MAILGUN_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "MAILGUN_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// 请求超时 (秒)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// 把 items 列表渲染为表格
    #[arg(long, global = true)]
    pub table: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 校验 API key 和 domain
    Ping,
    /// 直接调用任意 API 方法
    Call {
        /// 方法路径，如 tags/list
        method: String,
        /// key=value 形式的参数
        params: Vec<String>,
        /// 使用 GET 而不是 POST
        #[arg(long)]
        get: bool,
        /// 响应格式 (json, php, xml, yaml)
        #[arg(long, default_value = "json")]
        output: String,
    },
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Senders(SendersCommand),
    #[command(subcommand)]
    Tags(TagsCommand),
    #[command(subcommand)]
    Templates(TemplatesCommand),
    #[command(subcommand)]
    Urls(UrlsCommand),
    #[command(subcommand)]
    Webhooks(WebhooksCommand),
    #[command(subcommand)]
    Messages(MessagesCommand),
}

#[derive(Subcommand)]
pub enum UsersCommand {
    Ping,
    Info,
    Senders,
}

#[derive(Subcommand)]
pub enum SendersCommand {
    Domains,
    List,
    Info { address: String },
    TimeSeries { address: String },
}

#[derive(Subcommand)]
pub enum TagsCommand {
    List,
    Info { tag: String },
    TimeSeries { tag: String },
    AllTimeSeries,
}

#[derive(Subcommand)]
pub enum TemplatesCommand {
    Add { name: String, code: String },
    Update { name: String, code: String },
    Delete { name: String },
    Info { name: String },
    List,
    TimeSeries { name: String },
}

#[derive(Subcommand)]
pub enum UrlsCommand {
    List,
    TimeSeries { url: String },
    Search { q: String },
}

#[derive(Subcommand)]
pub enum WebhooksCommand {
    Add {
        url: String,
        #[arg(long = "event")]
        events: Vec<String>,
    },
    Update {
        url: String,
        #[arg(long = "event")]
        events: Vec<String>,
    },
    Delete { id: String },
    Info { id: String },
    List,
}

#[derive(Subcommand)]
pub enum MessagesCommand {
    Search {
        query: String,
        #[arg(long)]
        date_from: Option<NaiveDate>,
        #[arg(long)]
        date_to: Option<NaiveDate>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long = "sender")]
        senders: Vec<String>,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
    /// 发送邮件，参数为 key=value，附件写作 attachment=@path
    Send { params: Vec<String> },
    SendTemplate {
        template_name: String,
        /// JSON 格式的模板内容
        #[arg(long, default_value = "[]")]
        content: String,
        /// JSON 格式的邮件结构
        #[arg(long, default_value = "{}")]
        message: String,
    },
}

/// 解析 "key=value"
pub fn parse_param(s: &str) -> Option<(String, String)> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
}

fn parse_params(args: &[String]) -> Result<Params> {
    args.iter()
        .map(|arg| {
            parse_param(arg)
                .ok_or_else(|| anyhow!("Invalid parameter `{}`, expected key=value", arg))
        })
        .collect()
}

pub async fn run(cli: Cli) -> Result<()> {
    let global = cli.global;
    let formatter = ResponseFormatter::new(if global.table {
        ResponseFormat::Table
    } else {
        ResponseFormat::Pretty
    })
    .with_color(!global.no_color);
    if global.no_color {
        colored::control::set_override(false);
    }

    let overrides = Overrides {
        api_key: global.api_key,
        domain: global.domain,
        timeout: global.timeout,
        base_url: global.base_url,
    };
    let mut config = ConfigLoader::load(global.config.as_deref(), &overrides)?;
    if config.api_key.is_empty() && std::io::stdin().is_terminal() {
        config.api_key = inquire::Password::new("Mailgun API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?;
    }

    let client = MailgunClient::from_config(&config).await?;

    if let Some(body) = dispatch(&client, cli.command).await? {
        println!("{}", formatter.format(&body));
    }
    Ok(())
}

/// 执行子命令；`ping` 只依赖连接时的校验，没有响应体
async fn dispatch(client: &MailgunClient, command: Commands) -> Result<Option<ResponseBody>> {
    let body = match command {
        Commands::Ping => {
            println!("{} {}", "OK".green().bold(), client.endpoint());
            return Ok(None);
        }
        Commands::Call {
            method,
            params,
            get,
            output,
        } => {
            let http = if get { Method::Get } else { Method::Post };
            let output = OutputFormat::from(output.as_str());
            client
                .request(&method, &parse_params(&params)?, http, &output)
                .await?
        }
        Commands::Users(cmd) => match cmd {
            UsersCommand::Ping => client.users_ping().await?,
            UsersCommand::Info => client.users_info().await?,
            UsersCommand::Senders => client.users_senders().await?,
        },
        Commands::Senders(cmd) => match cmd {
            SendersCommand::Domains => client.senders_domains().await?,
            SendersCommand::List => client.senders_list().await?,
            SendersCommand::Info { address } => client.senders_info(&address).await?,
            SendersCommand::TimeSeries { address } => client.senders_time_series(&address).await?,
        },
        Commands::Tags(cmd) => match cmd {
            TagsCommand::List => client.tags_list().await?,
            TagsCommand::Info { tag } => client.tags_info(&tag).await?,
            TagsCommand::TimeSeries { tag } => client.tags_time_series(&tag).await?,
            TagsCommand::AllTimeSeries => client.tags_all_time_series().await?,
        },
        Commands::Templates(cmd) => match cmd {
            TemplatesCommand::Add { name, code } => client.templates_add(&name, &code).await?,
            TemplatesCommand::Update { name, code } => {
                client.templates_update(&name, &code).await?
            }
            TemplatesCommand::Delete { name } => client.templates_delete(&name).await?,
            TemplatesCommand::Info { name } => client.templates_info(&name).await?,
            TemplatesCommand::List => client.templates_list().await?,
            TemplatesCommand::TimeSeries { name } => client.templates_time_series(&name).await?,
        },
        Commands::Urls(cmd) => match cmd {
            UrlsCommand::List => client.urls_list().await?,
            UrlsCommand::TimeSeries { url } => client.urls_time_series(&url).await?,
            UrlsCommand::Search { q } => client.urls_search(&q).await?,
        },
        Commands::Webhooks(cmd) => match cmd {
            WebhooksCommand::Add { url, events } => {
                client.webhooks_add(&url, &as_strs(&events)).await?
            }
            WebhooksCommand::Update { url, events } => {
                client.webhooks_update(&url, &as_strs(&events)).await?
            }
            WebhooksCommand::Delete { id } => client.webhooks_delete(&id).await?,
            WebhooksCommand::Info { id } => client.webhooks_info(&id).await?,
            WebhooksCommand::List => client.webhooks_list().await?,
        },
        Commands::Messages(cmd) => match cmd {
            MessagesCommand::Search {
                query,
                date_from,
                date_to,
                tags,
                senders,
                limit,
            } => {
                let mut search = MessageSearch::new(query).tags(tags).senders(senders).limit(limit);
                search.date_from = date_from;
                search.date_to = date_to;
                client.messages_search(&search).await?
            }
            MessagesCommand::Send { params } => client.messages_send(parse_params(&params)?).await?,
            MessagesCommand::SendTemplate {
                template_name,
                content,
                message,
            } => {
                let content: serde_json::Value =
                    serde_json::from_str(&content).context("--content is not valid JSON")?;
                let message: serde_json::Value =
                    serde_json::from_str(&message).context("--message is not valid JSON")?;
                client
                    .messages_send_template(&template_name, &content, &message)
                    .await?
            }
        },
    };
    Ok(Some(body))
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(server: &MockServer) -> MailgunClient {
        Mock::given(method("GET"))
            .and(path("/v2/example.com/log"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"total_count": 0, "items": []})),
            )
            .expect(1)
            .mount(server)
            .await;
        let base = format!("{}/v2", server.uri());
        MailgunClient::connect_with_base(&base, "key-test", "example.com", 5)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_ping_has_no_body() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        // ping 不应再发出任何请求
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        assert!(dispatch(&client, Commands::Ping).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dispatch_returns_body() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/v2/example.com/tags/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_count": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = dispatch(&client, Commands::Tags(TagsCommand::List))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(body.get("total_count"), Some(&json!(1)));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("to=a@example.com"),
            Some(("to".to_string(), "a@example.com".to_string()))
        );
        assert_eq!(
            parse_param("text=a=b"),
            Some(("text".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_param("invalid"), None);
    }

    #[test]
    fn test_parse_params_keeps_order() {
        let args = vec![
            "from=me@example.com".to_string(),
            "attachment=@logo.png".to_string(),
        ];
        let params = parse_params(&args).unwrap();
        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["from", "attachment"]);
        assert_eq!(params.get("attachment"), Some("@logo.png"));

        assert!(parse_params(&["oops".to_string()]).is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "mailgun",
            "--domain",
            "mg.example.com",
            "webhooks",
            "add",
            "https://hooks.example.com",
            "--event",
            "open",
            "--event",
            "click",
        ])
        .unwrap();

        assert_eq!(cli.global.domain.as_deref(), Some("mg.example.com"));
        match cli.command {
            Commands::Webhooks(WebhooksCommand::Add { url, events }) => {
                assert_eq!(url, "https://hooks.example.com");
                assert_eq!(events, vec!["open", "click"]);
            }
            _ => panic!("Expected webhooks add"),
        }
    }

    #[test]
    fn test_cli_parsing_search_dates() {
        let cli = Cli::try_parse_from([
            "mailgun",
            "messages",
            "search",
            "welcome",
            "--date-from",
            "2024-01-05",
            "--limit",
            "10",
        ])
        .unwrap();

        match cli.command {
            Commands::Messages(MessagesCommand::Search {
                query,
                date_from,
                date_to,
                limit,
                ..
            }) => {
                assert_eq!(query, "welcome");
                assert_eq!(date_from, NaiveDate::from_ymd_opt(2024, 1, 5));
                assert_eq!(date_to, None);
                assert_eq!(limit, 10);
            }
            _ => panic!("Expected messages search"),
        }
    }

    #[test]
    fn test_cli_call_defaults() {
        let cli = Cli::try_parse_from(["mailgun", "call", "tags/list", "limit=5"]).unwrap();
        match cli.command {
            Commands::Call {
                method,
                params,
                get,
                output,
            } => {
                assert_eq!(method, "tags/list");
                assert_eq!(params, vec!["limit=5"]);
                assert!(!get);
                assert_eq!(output, "json");
            }
            _ => panic!("Expected call"),
        }
    }
}
