use std::fmt::Write;

use crate::domain::users::{Account, UserInfo, UserTariff};

/// Description used when the account list is empty.
pub const NO_ACCOUNTS: &str = "No accounts exists in response";

/// Render accounts, profile flags and tariff limits.
#[must_use]
pub fn format_user_info(accounts: &[Account], info: &UserInfo, tariff: &UserTariff) -> String {
    let mut out = String::new();

    if accounts.is_empty() {
        out.push_str(NO_ACCOUNTS);
    } else {
        out.push_str("\nAccounts:");
        for account in accounts {
            let _ = write!(out, "\n{account}");
        }
    }

    let _ = write!(
        out,
        "\n\nUser info:\ntariff={} premium={} qualified={}",
        info.tariff, info.premium, info.qualified
    );
    if !info.qualified_for_work_with.is_empty() {
        let _ = write!(
            out,
            "\nqualified for: {}",
            info.qualified_for_work_with.join(", ")
        );
    }

    if !tariff.unary_limits.is_empty() {
        out.push_str("\n\nUnary limits:");
        for limit in &tariff.unary_limits {
            let _ = write!(
                out,
                "\n{}/min: {}",
                limit.limit_per_minute,
                limit.methods.join(", ")
            );
        }
    }
    if !tariff.stream_limits.is_empty() {
        out.push_str("\n\nStream limits:");
        for limit in &tariff.stream_limits {
            let _ = write!(
                out,
                "\n{} (open {}): {}",
                limit.limit,
                limit.open,
                limit.streams.join(", ")
            );
        }
    }

    out
}
