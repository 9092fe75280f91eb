//! Page request and page result models.
//!
//! `PageRequest` is parsed from the `page`, `size` and `sort` query parameters and carries
//! the ordering down to the repository. `Page` carries one slice of results back up.

use crate::server::error::AppError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Sortable parking spot attributes, named by their JSON field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    BrandCar,
    ModelCar,
    ColorCar,
    ResponsibleName,
    Apartment,
    Block,
    RegistrationDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ParkingSpotNumber => "parkingSpotNumber",
            Self::LicensePlateCar => "licensePlateCar",
            Self::BrandCar => "brandCar",
            Self::ModelCar => "modelCar",
            Self::ColorCar => "colorCar",
            Self::ResponsibleName => "responsibleName",
            Self::Apartment => "apartment",
            Self::Block => "block",
            Self::RegistrationDate => "registrationDate",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let field = match value {
            "id" => Self::Id,
            "parkingSpotNumber" => Self::ParkingSpotNumber,
            "licensePlateCar" => Self::LicensePlateCar,
            "brandCar" => Self::BrandCar,
            "modelCar" => Self::ModelCar,
            "colorCar" => Self::ColorCar,
            "responsibleName" => Self::ResponsibleName,
            "apartment" => Self::Apartment,
            "block" => Self::Block,
            "registrationDate" => Self::RegistrationDate,
            _ => return None,
        };

        Some(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// Requested slice and ordering of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-indexed page number
    pub page: u64,
    pub size: u64,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl PageRequest {
    /// Builds a page request from raw query parameters
    ///
    /// A size below 1 falls back to the default size and a size above `MAX_PAGE_SIZE`
    /// is clamped. `sort` accepts `field` or `field,direction`.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number, defaults to 0
    /// - `size` - Entries per page, defaults to 10
    /// - `sort` - Sort expression, defaults to `id,asc`
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - The parsed request
    /// - `Err(AppError::BadRequest)` - Unknown sort field or direction, or a page whose
    ///   row offset overflows
    pub fn new(page: Option<u64>, size: Option<u64>, sort: Option<&str>) -> Result<Self, AppError> {
        let size = match size {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };

        let page = page.unwrap_or(0);
        // Row offset must fit the store's signed 64-bit OFFSET
        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Page {} is out of range for page size {}",
                    page, size
                )))
            }
        }

        let mut request = Self {
            page,
            size,
            ..Default::default()
        };

        if let Some(sort) = sort.map(str::trim).filter(|s| !s.is_empty()) {
            let mut parts = sort.split(',').map(str::trim);

            let field = parts.next().unwrap_or_default();
            request.sort = SortField::parse(field)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sort field '{}'", field)))?;

            if let Some(direction) = parts.next() {
                request.direction = SortDirection::parse(direction).ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown sort direction '{}'", direction))
                })?;
            }

            if parts.next().is_some() {
                return Err(AppError::BadRequest(format!(
                    "Invalid sort expression '{}', expected 'field,direction'",
                    sort
                )));
            }
        }

        Ok(request)
    }

    /// The applied ordering in `field,direction` form
    pub fn sort_label(&self) -> String {
        format!("{},{}", self.sort.as_str(), self.direction.as_str())
    }
}

/// One page of results together with the totals of the whole listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub sort: String,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: u64, request: &PageRequest) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_items.div_ceil(request.size),
            sort: request.sort_label(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            sort: self.sort,
        }
    }
}
