use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wildnest_client::{
    AppState,
    api::{
        AdminOperations, CategoryOperations, CommentOperations, DrinkOperations,
        RecommendOperations, UploadOperations,
        models::{CommentQuery, DrinkQuery, Feedback, NewComment, NewReply, PageQuery},
    },
    config::Config,
    error::ClientError,
    middleware::Notifier,
};

#[derive(Debug, Parser)]
#[command(name = "wildnest", about = "WildNest 酒吧客户端", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 酒品分类
    #[command(subcommand)]
    Categories(CategoryCommand),
    /// 酒品
    #[command(subcommand)]
    Drinks(DrinkCommand),
    /// 留言板
    #[command(subcommand)]
    Comments(CommentCommand),
    /// 今天喝什么
    #[command(subcommand)]
    Recommend(RecommendCommand),
    /// 管理员登录
    Login {
        username: String,
        #[arg(long, env = "WILDNEST_ADMIN_PASSWORD")]
        password: String,
    },
    /// 管理员登出
    Logout,
    /// 当前管理员信息
    Whoami,
    /// 是否已保存管理员令牌
    Token,
    /// 上传图片，多个文件时批量上传
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// 模拟页面导航，输出最终到达的路由
    Navigate { path: String },
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    List,
    Top,
    Tree,
    Children { parent_id: i64 },
    Search { keyword: String },
    Show { id: i64 },
}

#[derive(Debug, Subcommand)]
enum DrinkCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        keyword: Option<String>,
    },
    Show {
        id: i64,
    },
    Search {
        keyword: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    Featured,
    Popular,
    Tag {
        tag: String,
    },
    Price {
        min_price: f64,
        max_price: f64,
    },
    Count {
        category_id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum CommentCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        category: Option<String>,
    },
    Post {
        #[arg(long)]
        nickname: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long = "image")]
        images: Vec<String>,
    },
    Like {
        id: i64,
    },
    Reply {
        id: i64,
        #[arg(long)]
        nickname: String,
        #[arg(long)]
        content: String,
    },
    Replies {
        id: i64,
    },
    Hot {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Debug, Subcommand)]
enum RecommendCommand {
    Questions,
    /// 按所选选项ID获取推荐
    Result {
        #[arg(required = true)]
        answers: Vec<i64>,
    },
    Detail {
        id: i64,
    },
    Feedback {
        log_id: i64,
        feedback: String,
        #[arg(long)]
        reason: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClientError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn page(page: Option<u32>, size: Option<u32>) -> PageQuery {
    PageQuery { page, size }
}

async fn run(state: AppState, command: Command) -> Result<(), ClientError> {
    let client = &state.client;

    match command {
        Command::Categories(cmd) => {
            let categories = match cmd {
                CategoryCommand::List => CategoryOperations::get_categories(client).await?,
                CategoryCommand::Top => CategoryOperations::get_top_categories(client).await?,
                CategoryCommand::Tree => CategoryOperations::get_category_tree(client).await?,
                CategoryCommand::Children { parent_id } => {
                    CategoryOperations::get_child_categories(client, parent_id).await?
                }
                CategoryCommand::Search { keyword } => {
                    CategoryOperations::search_categories(client, &keyword).await?
                }
                CategoryCommand::Show { id } => {
                    vec![CategoryOperations::get_category_detail(client, id).await?]
                }
            };
            print_json(&categories)
        }
        Command::Drinks(cmd) => match cmd {
            DrinkCommand::List {
                page: p,
                size,
                category_id,
                keyword,
            } => {
                let query = DrinkQuery {
                    page: page(p, size),
                    category_id,
                    keyword,
                };
                print_json(&DrinkOperations::get_drinks(client, &query).await?)
            }
            DrinkCommand::Show { id } => {
                print_json(&DrinkOperations::get_drink_detail(client, id).await?)
            }
            DrinkCommand::Search {
                keyword,
                page: p,
                size,
            } => print_json(
                &DrinkOperations::search_drinks(client, &keyword, Some(PageQuery::new(p, size)))
                    .await?,
            ),
            DrinkCommand::Featured => {
                print_json(&DrinkOperations::get_featured_drinks(client).await?)
            }
            DrinkCommand::Popular => print_json(&DrinkOperations::get_popular_drinks(client).await?),
            DrinkCommand::Tag { tag } => {
                print_json(&DrinkOperations::get_drinks_by_tag(client, &tag).await?)
            }
            DrinkCommand::Price {
                min_price,
                max_price,
            } => print_json(
                &DrinkOperations::get_drinks_by_price_range(client, min_price, max_price).await?,
            ),
            DrinkCommand::Count { category_id } => print_json(
                &DrinkOperations::get_drink_count_by_category(client, category_id).await?,
            ),
        },
        Command::Comments(cmd) => match cmd {
            CommentCommand::List {
                page: p,
                size,
                category,
            } => {
                let query = CommentQuery {
                    page: page(p, size),
                    category,
                };
                print_json(&CommentOperations::get_comments(client, &query).await?)
            }
            CommentCommand::Post {
                nickname,
                content,
                category,
                images,
            } => {
                let comment = NewComment {
                    nickname,
                    content,
                    category,
                    images: (!images.is_empty()).then_some(images),
                };
                print_json(&CommentOperations::submit_comment(client, &comment).await?)
            }
            CommentCommand::Like { id } => {
                print_json(&CommentOperations::like_comment(client, id).await?)
            }
            CommentCommand::Reply {
                id,
                nickname,
                content,
            } => {
                let reply = NewReply { nickname, content };
                print_json(&CommentOperations::reply_comment(client, id, &reply).await?)
            }
            CommentCommand::Replies { id } => {
                print_json(&CommentOperations::get_comment_replies(client, id).await?)
            }
            CommentCommand::Hot { limit } => {
                print_json(&CommentOperations::get_hot_comments(client, limit).await?)
            }
        },
        Command::Recommend(cmd) => match cmd {
            RecommendCommand::Questions => {
                print_json(&RecommendOperations::get_questions(client).await?)
            }
            RecommendCommand::Result { answers } => {
                print_json(&RecommendOperations::get_recommendation(client, &answers).await?)
            }
            RecommendCommand::Detail { id } => {
                print_json(&RecommendOperations::get_recommendation_detail(client, id).await?)
            }
            RecommendCommand::Feedback {
                log_id,
                feedback,
                reason,
            } => {
                let feedback = Feedback {
                    log_id,
                    feedback,
                    reason,
                };
                print_json(&RecommendOperations::submit_feedback(client, &feedback).await?)
            }
        },
        Command::Login { username, password } => {
            print_json(&AdminOperations::login(client, &username, &password).await?)
        }
        Command::Logout => print_json(&AdminOperations::logout(client).await?),
        Command::Whoami => print_json(&AdminOperations::get_admin_info(client).await?),
        Command::Token => print_json(&serde_json::json!({
            "storage": state.config.storage_path,
            "authenticated": state.tokens.get()?.is_some(),
        })),
        Command::Upload { files } => {
            if let [file] = files.as_slice() {
                print_json(&UploadOperations::upload_image(client, file).await?)
            } else {
                let paths: Vec<&std::path::Path> = files.iter().map(PathBuf::as_path).collect();
                print_json(&UploadOperations::upload_images(client, &paths).await?)
            }
        }
        Command::Navigate { path } => {
            let mut router = state
                .router()
                .map_err(|e| ClientError::Config(e.to_string()))?;
            match router.push(&path) {
                Ok(nav) => print_json(&serde_json::json!({
                    "requested": nav.requested,
                    "path": nav.path,
                    "name": nav.name,
                    "params": nav.params,
                    "redirected": nav.redirected,
                    "title": router.document().title(),
                })),
                Err(e) => Err(ClientError::Config(e.to_string())),
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("加载配置失败: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("API 地址: {}", config.endpoint("/"));

    // 提示直接输出到终端
    let notifier: Arc<dyn Notifier> = Arc::new(|message: &str| eprintln!("[提示] {}", message));

    let state = match AppState::new(config, notifier) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("初始化客户端失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(state, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
