//! Static fallback dataset served when the remote store is unreachable.
//!
//! Substituted wholesale for the remote contents, never merged, so the map is
//! never empty in a demo environment.

use ndlocator_core::{Position, Reseller};

fn unit(
    id: i64,
    name: &str,
    address: &str,
    phone: &str,
    email: &str,
    position: Position,
    unit_type: &str,
    website: Option<&str>,
    description: &str,
) -> Reseller {
    Reseller {
        id,
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        position,
        unit_type: unit_type.to_string(),
        website: website.map(str::to_string),
        description: Some(description.to_string()),
        photo: None,
        coverage_radius: None,
        show_coverage: None,
        covered_cities: None,
    }
}

/// The full demo dataset.
#[must_use]
pub fn fallback_resellers() -> Vec<Reseller> {
    vec![
        unit(
            1,
            "DroneShop SP",
            "Av. Paulista, 1000 - São Paulo, SP",
            "(11) 99999-9999",
            "contato@droneshopsp.com.br",
            Position(-23.5505, -46.6333),
            "Loja Física e Online",
            Some("https://droneshopsp.com.br"),
            "Especializada em drones DJI e FPV",
        ),
        unit(
            2,
            "Rio Drones",
            "Rua das Laranjeiras, 500 - Rio de Janeiro, RJ",
            "(21) 88888-8888",
            "vendas@riodrones.com.br",
            Position(-22.9068, -43.1729),
            "Assistência Técnica",
            None,
            "Manutenção e reparo especializado",
        ),
        unit(
            3,
            "Minas Drone Center",
            "Av. Afonso Pena, 3000 - Belo Horizonte, MG",
            "(31) 77777-7777",
            "info@minasdronecenter.com.br",
            Position(-19.9167, -43.9345),
            "Loja Física",
            None,
            "Maior variedade de drones em MG",
        ),
        unit(
            4,
            "Sul Drones",
            "Rua XV de Novembro, 800 - Curitiba, PR",
            "(41) 66666-6666",
            "atendimento@suldrones.com.br",
            Position(-25.4284, -49.2733),
            "Cursos e Treinamento",
            None,
            "Cursos de pilotagem e certificação",
        ),
        unit(
            5,
            "Nordeste Sky",
            "Av. Boa Viagem, 2000 - Recife, PE",
            "(81) 55555-5555",
            "contato@nordestesky.com.br",
            Position(-8.1148, -34.9042),
            "Aluguel de Drones",
            None,
            "Aluguel para eventos e filmagens",
        ),
        unit(
            6,
            "Centro-Oeste Drones",
            "Av. das Nações, 1500 - Brasília, DF",
            "(61) 44444-4444",
            "vendas@centrooesteidrones.com.br",
            Position(-15.7942, -47.8822),
            "Loja Online",
            None,
            "Entrega para todo o Centro-Oeste",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let units = fallback_resellers();
        let ids: HashSet<i64> = units.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), units.len());
    }

    #[test]
    fn positions_are_in_range() {
        assert!(fallback_resellers().iter().all(|r| r.position.in_range()));
    }

    #[test]
    fn required_fields_are_non_empty() {
        for unit in fallback_resellers() {
            assert!(!unit.name.is_empty());
            assert!(!unit.address.is_empty());
            assert!(!unit.phone.is_empty());
            assert!(!unit.email.is_empty());
        }
    }
}
