//! CRM pipeline aggregates.

use crate::model::crm::{Client, ClientStatus};

/// Total project value of clients still at the lead stage.
pub fn pipeline_value(clients: &[Client]) -> f64 {
    clients
        .iter()
        .filter(|client| client.status == ClientStatus::Lead)
        .map(|client| client.project_value)
        .sum()
}

/// Outstanding value across lead and active clients.
pub fn pipeline_potential(clients: &[Client]) -> f64 {
    clients
        .iter()
        .filter(|client| client.status.is_pipeline())
        .map(Client::outstanding)
        .sum()
}

/// Project value of every client regardless of stage.
pub fn total_crm_value(clients: &[Client]) -> f64 {
    clients.iter().map(|client| client.project_value).sum()
}

pub fn count_by_status(clients: &[Client], status: ClientStatus) -> usize {
    clients
        .iter()
        .filter(|client| client.status == status)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_by_status, pipeline_potential, pipeline_value};
    use crate::model::brand::BrandId;
    use crate::model::crm::{Client, ClientStatus};

    fn client(status: ClientStatus, project_value: f64, paid_amount: f64) -> Client {
        Client {
            id: format!("{status:?}-{project_value}"),
            name: "n".to_string(),
            company: "c".to_string(),
            email: None,
            phone: None,
            brand_id: BrandId::CeoHive,
            status,
            project_value,
            paid_amount,
            last_contact: "Today".to_string(),
            notes: None,
        }
    }

    #[test]
    fn pipeline_value_counts_leads_only() {
        let clients = [
            client(ClientStatus::Lead, 50_000.0, 0.0),
            client(ClientStatus::Active, 120_000.0, 60_000.0),
            client(ClientStatus::Lost, 9_000.0, 0.0),
        ];
        assert_eq!(pipeline_value(&clients), 50_000.0);
    }

    #[test]
    fn pipeline_potential_sums_outstanding_of_open_stages() {
        let clients = [
            client(ClientStatus::Lead, 50_000.0, 0.0),
            client(ClientStatus::Active, 120_000.0, 60_000.0),
            client(ClientStatus::Completed, 85_000.0, 80_000.0),
        ];
        assert_eq!(pipeline_potential(&clients), 110_000.0);
        assert_eq!(count_by_status(&clients, ClientStatus::Active), 1);
    }
}
