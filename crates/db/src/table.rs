use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum UserProfile {
    Table,
    Id,
    Name,
    StudentId,
    Email,
    Role,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Event {
    Table,
    Id,
    Title,
    Date,
    Time,
    Location,
    Description,
    Category,
    Organizer,
    ImageUrl,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Registration {
    Table,
    Id,
    EventId,
    UserId,
    StudentName,
    StudentId,
    StudentEmail,
    CreatedAt,
}
