use crate::cli::TicketsCommand;
use crate::error::ZmError;
use crate::render;
use crate::zammad_client::{TicketListParams, ZammadClient};

pub(super) async fn run(
    command: &TicketsCommand,
    client: &ZammadClient,
) -> Result<String, ZmError> {
    match command {
        TicketsCommand::List {
            page,
            limit,
            expand,
        } => {
            tracing::debug!(page, limit, expand, "tickets list");
            let params = TicketListParams::new()
                .with_page(*page)
                .with_per_page(*limit)
                .with_expand(*expand);
            let tickets = client.list_tickets(&params).await?;
            Ok(render::format_ticket_list(&tickets))
        }

        TicketsCommand::Get { id } => {
            tracing::debug!(ticket_id = id, "tickets get");
            let (ticket, articles) = client.get_ticket_with_articles(*id).await?;
            Ok(render::format_ticket_details(&ticket, &articles))
        }

        TicketsCommand::Search(args) => {
            // Rejects an empty search before anything goes over the wire.
            let query = args.to_query().build()?;
            tracing::debug!(query = %query, limit = args.limit, "tickets search");

            let results = client.search_tickets(&query).await?;
            Ok(render::format_search_results(
                &query,
                &results,
                args.limit,
                args.detailed,
            ))
        }

        TicketsCommand::Create(args) => {
            let request = args.to_request();
            let ticket = client.create_ticket(&request).await?;
            tracing::info!(ticket_id = ticket.id, "ticket created");
            Ok(render::format_created_ticket(
                &ticket,
                &client.ticket_web_url(ticket.id),
            ))
        }

        TicketsCommand::Update(args) => {
            tracing::debug!(ticket_id = args.id, "tickets update");
            let ticket = client.update_ticket(args.id, &args.to_request()).await?;
            Ok(render::format_updated_ticket(&ticket))
        }
    }
}
