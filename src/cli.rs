//! Operator console over the admin API.
//!
//! Every command resolves the signed-in operator's role first and checks
//! the required permission through the permission engine before any
//! mutating or gated request is issued; a denial prints locally and never
//! produces request traffic.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::auth::{has_permission, role_permissions, AdminUser, Permission};
use crate::client::{AdminApiClient, TransactionSearchParams};
use crate::config::{mask_token, Config};
use crate::dispute::{build_resolution_request, DisputeDecision};
use crate::domain::transaction::{dispute_reason_label, DisputedTransaction};
use crate::domain::user::BlockUserRequest;
use crate::domain::kyc::RejectKycRequest;
use crate::domain::Pagination;
use crate::error::AppError;

const PAGE_SIZE: u32 = 20;

#[derive(Parser)]
#[command(name = "escrow-admin")]
#[command(about = "Escrow Admin - operator console for the escrow marketplace", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved configuration
    Config,

    /// Show the signed-in operator and their granted permissions
    Whoami,

    /// User management commands
    #[command(subcommand)]
    Users(UserCommands),

    /// Seller KYC commands
    #[command(subcommand)]
    Kyc(KycCommands),

    /// Transaction commands
    #[command(subcommand)]
    Tx(TxCommands),
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Look up a user by phone number
    Show {
        phone: String,
    },

    /// Block a user
    Block {
        phone: String,
        /// Reason shown in the blocked-users listing
        #[arg(short, long)]
        reason: String,
    },

    /// Unblock a user
    Unblock {
        phone: String,
    },

    /// Delete a user
    Delete {
        phone: String,
    },

    /// List blocked users
    Blocked {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Subcommand)]
pub enum KycCommands {
    /// List sellers with pending KYC submissions
    Pending {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Approve a seller's KYC
    Approve {
        seller_id: Uuid,
    },

    /// Reject a seller's KYC
    Reject {
        seller_id: Uuid,
        #[arg(short, long)]
        reason: String,
    },
}

#[derive(Subcommand)]
pub enum TxCommands {
    /// Search transactions by code or party phone
    Search {
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        buyer_phone: Option<String>,
        #[arg(long)]
        seller_phone: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// List disputed transactions
    Disputed {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Mark a dispatched transaction as completed
    Complete {
        tx_id: Uuid,
    },

    /// Resolve a disputed transaction
    Resolve {
        tx_id: Uuid,
        /// Settlement outcome: refund, payout or split
        #[arg(long)]
        decision: DisputeDecision,
        /// Amount refunded to the buyer (split only)
        #[arg(long, default_value = "")]
        buyer_refund: String,
        /// Amount paid out to the seller (split only)
        #[arg(long, default_value = "")]
        seller_payout: String,
        /// Resolution notes for record keeping
        #[arg(long)]
        notes: Option<String>,
    },
}

pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Config => handle_config(config),
        Commands::Whoami => handle_whoami(&config.client()).await,
        Commands::Users(command) => handle_users(&config.client(), command).await,
        Commands::Kyc(command) => handle_kyc(&config.client(), command).await,
        Commands::Tx(command) => handle_tx(&config.client(), command).await,
    }
}

fn handle_config(config: &Config) -> anyhow::Result<()> {
    println!("Configuration:");
    println!("  Admin API Base URL: {}", config.api_base_url);
    match &config.access_token {
        Some(token) => println!("  Access Token: {}", mask_token(token)),
        None => println!("  Access Token: (not set)"),
    }
    println!("  HTTP Timeout: {}s", config.http_timeout_secs);
    println!("✓ Configuration is valid");
    Ok(())
}

/// Fetches the session and returns the operator it belongs to.
pub async fn current_operator(client: &AdminApiClient) -> Result<AdminUser, AppError> {
    let session = client.verify_session().await?;
    match session.admin {
        Some(admin) if session.valid => Ok(admin),
        _ => Err(AppError::NotAuthenticated),
    }
}

/// Resolves the operator's role and refuses the action before any request
/// traffic when the role does not hold `permission`.
pub async fn require_permission(
    client: &AdminApiClient,
    permission: Permission,
) -> Result<AdminUser, AppError> {
    let admin = current_operator(client).await?;
    if !has_permission(Some(admin.role), permission) {
        tracing::warn!(
            operator = %admin.username,
            role = %admin.role,
            %permission,
            "action refused by permission engine"
        );
        return Err(AppError::PermissionDenied {
            role: admin.role,
            permission,
        });
    }
    Ok(admin)
}

async fn handle_whoami(client: &AdminApiClient) -> anyhow::Result<()> {
    let admin = current_operator(client).await?;
    println!("Signed in as {} ({})", admin.username, admin.role);
    println!("Granted permissions:");
    for permission in role_permissions(admin.role) {
        println!("  - {}", permission);
    }
    Ok(())
}

async fn handle_users(client: &AdminApiClient, command: UserCommands) -> anyhow::Result<()> {
    match command {
        UserCommands::Show { phone } => {
            require_permission(client, Permission::UserView).await?;
            let user = client.get_user(&phone).await?;
            println!("{} ({})", user.name, user.phone);
            if let Some(email) = &user.email {
                println!("  Email: {}", email);
            }
            println!("  Verified: {}", user.verified);
            println!("  Seller: {}", user.is_seller);
            println!("  Blocked: {}", user.is_blocked);
            if let Some(kyc) = &user.kyc_details {
                println!("  KYC Status: {}", kyc.kyc_status.as_str());
            }
            if let Some(payouts) = &user.payout_summary {
                println!(
                    "  Payouts: {} pending / {} completed",
                    payouts.total_pending, payouts.total_completed
                );
            }
        }
        UserCommands::Block { phone, reason } => {
            let admin = require_permission(client, Permission::UserBlock).await?;
            client.block_user(&phone, &BlockUserRequest { reason }).await?;
            tracing::info!(operator = %admin.username, %phone, "user blocked");
            println!("✓ User {} blocked", phone);
        }
        UserCommands::Unblock { phone } => {
            let admin = require_permission(client, Permission::UserBlock).await?;
            client.unblock_user(&phone).await?;
            tracing::info!(operator = %admin.username, %phone, "user unblocked");
            println!("✓ User {} unblocked", phone);
        }
        UserCommands::Delete { phone } => {
            let admin = require_permission(client, Permission::UserDelete).await?;
            client.delete_user(&phone).await?;
            tracing::info!(operator = %admin.username, %phone, "user deleted");
            println!("✓ User {} deleted", phone);
        }
        UserCommands::Blocked { page } => {
            require_permission(client, Permission::UserView).await?;
            let listing = client.list_blocked_users(page, PAGE_SIZE).await?;
            for user in &listing.users {
                println!(
                    "{}  {}  blocked {}  ({})",
                    user.phone,
                    user.name,
                    user.blocked_at.format("%Y-%m-%d"),
                    user.reason
                );
            }
            print_pagination(&listing.pagination);
        }
    }
    Ok(())
}

async fn handle_kyc(client: &AdminApiClient, command: KycCommands) -> anyhow::Result<()> {
    match command {
        KycCommands::Pending { page } => {
            require_permission(client, Permission::KycView).await?;
            let listing = client.list_pending_kyc(page, PAGE_SIZE, None).await?;
            for seller in &listing.sellers {
                let business = seller
                    .basic_details
                    .as_ref()
                    .and_then(|details| details.business_name.as_deref())
                    .unwrap_or("-");
                println!(
                    "{}  {}  {}  {}",
                    seller.seller_id,
                    seller.user.name,
                    business,
                    seller.kyc.kyc_status.as_str()
                );
            }
            print_pagination(&listing.pagination);
        }
        KycCommands::Approve { seller_id } => {
            let admin = require_permission(client, Permission::KycApprove).await?;
            client.approve_kyc(seller_id).await?;
            tracing::info!(operator = %admin.username, %seller_id, "kyc approved");
            println!("✓ KYC approved for seller {}", seller_id);
        }
        KycCommands::Reject { seller_id, reason } => {
            let admin = require_permission(client, Permission::KycApprove).await?;
            client.reject_kyc(seller_id, &RejectKycRequest { reason }).await?;
            tracing::info!(operator = %admin.username, %seller_id, "kyc rejected");
            println!("✓ KYC rejected for seller {}", seller_id);
        }
    }
    Ok(())
}

async fn handle_tx(client: &AdminApiClient, command: TxCommands) -> anyhow::Result<()> {
    match command {
        TxCommands::Search {
            code,
            buyer_phone,
            seller_phone,
            page,
        } => {
            require_permission(client, Permission::TransactionView).await?;
            let params = TransactionSearchParams {
                code,
                buyer_phone,
                seller_phone,
                page: Some(page),
                limit: Some(PAGE_SIZE),
            };
            let listing = client.search_transactions(&params).await?;
            for tx in &listing.transactions {
                println!(
                    "{}  {}  {}  {}",
                    tx.txn_code,
                    tx.title,
                    tx.amount,
                    tx.status.as_str()
                );
            }
            print_pagination(&listing.pagination);
        }
        TxCommands::Disputed { page } => {
            require_permission(client, Permission::TransactionView).await?;
            let listing = client.list_disputed_transactions(page, PAGE_SIZE).await?;
            for disputed in &listing.transactions {
                println!(
                    "{}  {}  {}  {}",
                    disputed.transaction.id,
                    disputed.transaction.txn_code,
                    disputed.transaction.amount,
                    dispute_reason_label(disputed.dispute_reason.as_deref())
                );
            }
            print_pagination(&listing.pagination);
        }
        TxCommands::Complete { tx_id } => {
            let admin = require_permission(client, Permission::TransactionAction).await?;
            client.complete_transaction(tx_id).await?;
            tracing::info!(operator = %admin.username, %tx_id, "transaction completed");
            println!("✓ Transaction {} marked as completed", tx_id);
        }
        TxCommands::Resolve {
            tx_id,
            decision,
            buyer_refund,
            seller_payout,
            notes,
        } => {
            let admin = require_permission(client, Permission::TransactionAction).await?;
            let disputed = find_disputed(client, tx_id).await?;
            let request = build_resolution_request(
                decision,
                &buyer_refund,
                &seller_payout,
                notes,
                &disputed.transaction.amount,
            )?;
            let outcome = client.resolve_dispute(tx_id, &request).await?;
            tracing::info!(
                operator = %admin.username,
                %tx_id,
                decision = %outcome.decision,
                status = outcome.status.as_str(),
                "dispute resolved"
            );
            println!(
                "✓ Dispute on {} resolved: {} -> {}",
                disputed.transaction.txn_code,
                outcome.decision,
                outcome.status.as_str()
            );
            println!("  Resolved at {}", outcome.resolved_at);
        }
    }
    Ok(())
}

/// Pages through the disputed listing until `tx_id` shows up; resolution
/// needs the escrowed amount to validate a split against.
async fn find_disputed(
    client: &AdminApiClient,
    tx_id: Uuid,
) -> Result<DisputedTransaction, AppError> {
    let mut page = 1;
    loop {
        let listing = client.list_disputed_transactions(page, PAGE_SIZE).await?;
        let has_more = listing.pagination.has_more;
        if let Some(found) = listing
            .transactions
            .into_iter()
            .find(|disputed| disputed.transaction.id == tx_id)
        {
            return Ok(found);
        }
        if !has_more {
            return Err(AppError::DisputeNotFound(tx_id));
        }
        page += 1;
    }
}

fn print_pagination(pagination: &Pagination) {
    println!(
        "page {}/{} ({} total)",
        pagination.current_page, pagination.total_pages, pagination.total_count
    );
}
