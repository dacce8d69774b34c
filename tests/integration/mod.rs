mod flight_tests;
