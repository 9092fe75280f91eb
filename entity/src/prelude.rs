pub use super::parking_spot::Entity as ParkingSpot;
