//! Service computing year-over-year statistics from asset snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::try_join;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::fixed_assets::{FixedAsset, FixedAssetRepositoryTrait, FixedAssetStatus};
use crate::proration::{allocate, DateWindow};
use crate::statistics::statistics_model::{
    statistics_years, FixedStatusCounts, FixedYearlyStatistics, MonthlyPoint,
    VirtualStatusCounts, VirtualYearlyStatistics, YearlySummary,
};
use crate::virtual_assets::{VirtualAsset, VirtualAssetRepositoryTrait, VirtualAssetStatus};

/// Trait for statistics service operations.
///
/// `today` is taken explicitly so displayed figures are reproducible;
/// status counts always reflect the current real-world state, not the
/// historical state of the displayed year.
#[async_trait]
pub trait StatisticsServiceTrait: Send + Sync {
    /// Years selectable in statistics views, sorted descending.
    async fn available_years(&self, today: NaiveDate) -> Result<Vec<i32>>;
    async fn virtual_statistics(
        &self,
        year: i32,
        today: NaiveDate,
    ) -> Result<VirtualYearlyStatistics>;
    async fn fixed_statistics(&self, year: i32, today: NaiveDate)
        -> Result<FixedYearlyStatistics>;
}

/// Computes yearly summaries by repeated application of the proration,
/// rent, and depreciation calculators across months 1-12.
pub struct StatisticsService {
    virtual_repository: Arc<dyn VirtualAssetRepositoryTrait>,
    fixed_repository: Arc<dyn FixedAssetRepositoryTrait>,
}

impl StatisticsService {
    pub fn new(
        virtual_repository: Arc<dyn VirtualAssetRepositoryTrait>,
        fixed_repository: Arc<dyn FixedAssetRepositoryTrait>,
    ) -> Self {
        StatisticsService {
            virtual_repository,
            fixed_repository,
        }
    }

    fn virtual_summary(assets: &[VirtualAsset], year: i32) -> YearlySummary {
        let monthly: Vec<MonthlyPoint> = (1..=12)
            .map(|month| {
                let window = DateWindow::month(year, month);
                let amount = assets
                    .iter()
                    .map(|a| allocate(a.start_date, a.end_date, a.total_amount, window))
                    .sum();
                MonthlyPoint { month, amount }
            })
            .collect();

        let mut by_category: HashMap<String, Decimal> = HashMap::new();
        let year_window = DateWindow::year(year);
        for asset in assets {
            let amount = allocate(
                asset.start_date,
                asset.end_date,
                asset.total_amount,
                year_window,
            );
            if amount > Decimal::ZERO {
                *by_category
                    .entry(asset.category_name.clone())
                    .or_insert(Decimal::ZERO) += amount;
            }
        }

        YearlySummary::assemble(year, monthly, by_category)
    }

    fn virtual_status_counts(assets: &[VirtualAsset], today: NaiveDate) -> VirtualStatusCounts {
        let mut counts = VirtualStatusCounts::default();
        for asset in assets {
            match asset.status(today) {
                VirtualAssetStatus::Active => counts.active += 1,
                VirtualAssetStatus::Expiring => counts.expiring += 1,
                VirtualAssetStatus::Expired => counts.expired += 1,
            }
        }
        counts
    }

    fn fixed_summary(assets: &[FixedAsset], year: i32, today: NaiveDate) -> FixedYearlyStatistics {
        // Monthly trend is rental income; the category breakdown carries
        // net book value as of today
        let monthly: Vec<MonthlyPoint> = (1..=12)
            .map(|month| MonthlyPoint {
                month,
                amount: assets.iter().map(|a| a.monthly_rent_income(year, month)).sum(),
            })
            .collect();

        let mut by_category: HashMap<String, Decimal> = HashMap::new();
        let mut total_net_value = Decimal::ZERO;
        for asset in assets {
            let net = asset.net_value(today);
            total_net_value += net;
            *by_category
                .entry(asset.category_name.clone())
                .or_insert(Decimal::ZERO) += net;
        }

        FixedYearlyStatistics {
            summary: YearlySummary::assemble(year, monthly, by_category),
            total_net_value,
            status_counts: Self::fixed_status_counts(assets),
        }
    }

    fn fixed_status_counts(assets: &[FixedAsset]) -> FixedStatusCounts {
        let mut counts = FixedStatusCounts::default();
        for asset in assets {
            match asset.status {
                FixedAssetStatus::InUse => counts.in_use += 1,
                FixedAssetStatus::Idle => counts.idle += 1,
                FixedAssetStatus::Maintenance => counts.maintenance += 1,
                FixedAssetStatus::Disposed => counts.disposed += 1,
                FixedAssetStatus::Rent => counts.rent += 1,
                FixedAssetStatus::Sell => counts.sell += 1,
            }
        }
        counts
    }
}

#[async_trait]
impl StatisticsServiceTrait for StatisticsService {
    async fn available_years(&self, today: NaiveDate) -> Result<Vec<i32>> {
        let (virtual_assets, fixed_assets) = try_join!(
            self.virtual_repository.list_virtual_assets(),
            self.fixed_repository.list_fixed_assets(),
        )?;

        let mut ranges: Vec<(NaiveDate, NaiveDate)> = virtual_assets
            .iter()
            .map(|a| (a.start_date, a.end_date))
            .collect();
        ranges.extend(
            fixed_assets
                .iter()
                .map(|a| (a.purchase_date, a.disposed_date.unwrap_or(today))),
        );

        Ok(statistics_years(&ranges, today))
    }

    async fn virtual_statistics(
        &self,
        year: i32,
        today: NaiveDate,
    ) -> Result<VirtualYearlyStatistics> {
        let assets = self.virtual_repository.list_virtual_assets().await?;
        debug!("Computing virtual statistics for {} over {} assets", year, assets.len());

        Ok(VirtualYearlyStatistics {
            summary: Self::virtual_summary(&assets, year),
            status_counts: Self::virtual_status_counts(&assets, today),
        })
    }

    async fn fixed_statistics(
        &self,
        year: i32,
        today: NaiveDate,
    ) -> Result<FixedYearlyStatistics> {
        let assets = self.fixed_repository.list_fixed_assets().await?;
        debug!("Computing fixed statistics for {} over {} assets", year, assets.len());

        Ok(Self::fixed_summary(&assets, year, today))
    }
}
