use crate::BLINDS;
use crate::CADENCE_BASE;
use crate::Chips;
use std::time::Duration;

/// One scheduled blind level, timed from session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub delay: Duration,
    pub amount: Chips,
}

/// Time between blind levels: one unit per player on top of the base.
pub fn cadence(players: usize, unit: Duration) -> Duration {
    let units = u32::try_from(players)
        .unwrap_or(u32::MAX)
        .saturating_add(CADENCE_BASE);
    unit.saturating_mul(units)
}

/// Full blind ladder for a table of `players`. The first level is immediate.
pub fn ladder(players: usize, unit: Duration) -> Vec<Alert> {
    let cadence = cadence(players, unit);
    BLINDS
        .iter()
        .zip(0u32..)
        .map(|(&amount, i)| Alert {
            delay: cadence.saturating_mul(i),
            amount,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(alerts: &[Alert], unit: Duration) -> Vec<u32> {
        alerts
            .iter()
            .map(|a| (a.delay.as_nanos() / unit.as_nanos()) as u32)
            .collect()
    }

    #[test]
    fn five_players_every_ten_units() {
        let unit = Duration::from_secs(60);
        let alerts = ladder(5, unit);
        assert_eq!(
            units(&alerts, unit),
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]
        );
        assert_eq!(
            alerts.iter().map(|a| a.amount).collect::<Vec<_>>(),
            vec![100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000]
        );
    }

    #[test]
    fn seven_players_every_twelve_units() {
        let unit = Duration::from_secs(1);
        let alerts = ladder(7, unit);
        assert_eq!(cadence(7, unit), Duration::from_secs(12));
        assert_eq!(units(&alerts, unit)[..4], [0, 12, 24, 36]);
        assert_eq!(alerts.last().map(|a| a.delay), Some(Duration::from_secs(120)));
    }

    #[test]
    fn empty_table_still_has_base_cadence() {
        assert_eq!(cadence(0, Duration::from_secs(60)), Duration::from_secs(300));
    }

    #[test]
    fn absurd_tables_saturate() {
        let alerts = ladder(usize::MAX, Duration::from_secs(60));
        assert_eq!(alerts.len(), BLINDS.len());
        assert_eq!(alerts[0].delay, Duration::ZERO);
    }
}
