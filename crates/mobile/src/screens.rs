//! Home screen per role: mounts the role's hooks, waits for them to settle,
//! and builds the dashboard view model.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use ecorp_auth::{Role, User};
use ecorp_client::DataSource;
use ecorp_core::{OrderStatus, fixtures};

use crate::dashboard::sales::format_thousands;
use crate::dashboard::{ExecutiveSummary, InquiryDesk, SalesSummary, TicketBoard, WarehouseSummary};
use crate::hooks::{Analytics, Orders, Parts, Sales, ServiceTickets};
use crate::offline::DataOrigin;
use crate::resource::Resource;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeScreen {
    Warehouse {
        summary: WarehouseSummary,
        open_orders: usize,
        origin: DataOrigin,
    },
    Sales {
        summary: SalesSummary,
        origin: DataOrigin,
    },
    CustomerService {
        desk: InquiryDesk,
    },
    Mechanic {
        board: TicketBoard,
        origin: DataOrigin,
    },
    Executive {
        summary: ExecutiveSummary,
        origin: DataOrigin,
        notice: Option<String>,
    },
}

/// Mount the hooks `user`'s home screen needs and build it once they settle.
pub async fn build_home(
    user: &User,
    source: Arc<dyn DataSource>,
    limit: u32,
    today: NaiveDate,
) -> HomeScreen {
    match user.role {
        Role::Warehouse => {
            let parts = Resource::mount(Parts, Arc::clone(&source));
            let orders = Resource::mount(Orders, source);
            let parts = parts.settled().await;
            let orders = orders.settled().await;
            HomeScreen::Warehouse {
                summary: WarehouseSummary::build(&parts.data, &fixtures::scan_records(), today),
                open_orders: orders
                    .data
                    .iter()
                    .filter(|o| o.status != OrderStatus::Delivered)
                    .count(),
                origin: parts.origin(),
            }
        }
        Role::Sales => {
            let sales = Resource::mount(Sales { limit }, source).settled().await;
            HomeScreen::Sales {
                summary: SalesSummary::for_user(&sales.data, &user.name),
                origin: sales.origin(),
            }
        }
        Role::CustomerService => HomeScreen::CustomerService {
            desk: InquiryDesk::seeded(),
        },
        Role::Mechanic => {
            let tickets = Resource::mount(ServiceTickets { limit }, source)
                .settled()
                .await;
            HomeScreen::Mechanic {
                board: TicketBoard::for_mechanic(&tickets.data, &user.name),
                origin: tickets.origin(),
            }
        }
        Role::Csuite => {
            let analytics = Resource::mount(Analytics, source).settled().await;
            HomeScreen::Executive {
                summary: ExecutiveSummary::build(&analytics.data),
                origin: analytics.origin(),
                notice: analytics.error,
            }
        }
    }
}

impl fmt::Display for HomeScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeScreen::Warehouse {
                summary,
                open_orders,
                origin,
            } => {
                writeln!(f, "Total parts: {} {}", summary.total_parts, origin.badge())?;
                writeln!(f, "Scans today: {}", summary.scans_today.len())?;
                writeln!(f, "Open orders: {open_orders}")?;
                for part in &summary.needs_reorder {
                    writeln!(f, "  reorder {} ({}), {} in stock", part.name, part.sku, part.quantity)?;
                }
                Ok(())
            }
            HomeScreen::Sales { summary, origin } => {
                writeln!(f, "My sales: {} {}", summary.my_sales.len(), origin.badge())?;
                writeln!(f, "Revenue: {}", format_thousands(summary.my_total))?;
                for sale in &summary.my_sales {
                    writeln!(
                        f,
                        "  {} {} to {} on {}",
                        sale.id,
                        sale.model,
                        sale.customer_name,
                        sale.date.format("%Y-%m-%d")
                    )?;
                }
                Ok(())
            }
            HomeScreen::CustomerService { desk } => {
                writeln!(f, "Open inquiries: {}", desk.open().count())?;
                writeln!(f, "Resolved: {}", desk.resolved().count())?;
                for inquiry in desk.open() {
                    writeln!(f, "  {} {}: {}", inquiry.id, inquiry.customer_name, inquiry.topic)?;
                }
                Ok(())
            }
            HomeScreen::Mechanic { board, origin } => {
                writeln!(f, "My tickets: {} {}", board.my_tickets.len(), origin.badge())?;
                writeln!(f, "Open tickets: {}", board.open_tickets.len())?;
                for ticket in board.my_tickets.iter().chain(&board.open_tickets) {
                    writeln!(
                        f,
                        "  {} [{}] {}: {}",
                        ticket.id, ticket.status, ticket.vehicle_model, ticket.issue
                    )?;
                }
                Ok(())
            }
            HomeScreen::Executive {
                summary,
                origin,
                notice,
            } => {
                if let Some(notice) = notice {
                    writeln!(f, "{notice}")?;
                }
                writeln!(
                    f,
                    "Sales YTD: {} {} {}",
                    summary.sales_ytd,
                    summary.sales_growth.as_deref().unwrap_or("n/a"),
                    origin.badge()
                )?;
                writeln!(
                    f,
                    "Parts cost YTD: {} {}",
                    summary.parts_cost_ytd,
                    summary.parts_cost_growth.as_deref().unwrap_or("n/a")
                )?;
                if let Some(margin) = summary.company_margin {
                    writeln!(f, "Company margin: {margin:.1}%")?;
                }
                for bar in &summary.bars {
                    writeln!(f, "  {:>3} {:>5.1}%", bar.month, bar.percent_of_peak)?;
                }
                Ok(())
            }
        }
    }
}
